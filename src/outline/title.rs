//! Document title resolution.

use memchr::memchr;

use super::extract::strip_tags;
use crate::html::unescape;

/// Resolve a document title from linear markup.
///
/// Returns the text of the first level-1 heading, with nested markup
/// stripped and entities decoded; if the markup has no non-empty `<h1>`,
/// falls back to `fallback_name` with its extension suffix removed.
/// Deterministic and stateless.
pub fn resolve(markup: &str, fallback_name: &str) -> String {
    if let Some(inner) = first_h1_content(markup)
        && !inner.is_empty()
    {
        return unescape(&strip_tags(inner));
    }

    strip_extension(fallback_name).to_string()
}

/// Raw content of the first `<h1>...</h1>` pair, ASCII case-insensitive.
/// Markers without a closing tag are not considered.
fn first_h1_content(markup: &str) -> Option<&str> {
    let bytes = markup.as_bytes();
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let start = pos + offset;
        let is_h1 = bytes.len() > start + 2
            && bytes[start + 1].eq_ignore_ascii_case(&b'h')
            && bytes[start + 2] == b'1'
            && matches!(
                bytes.get(start + 3),
                Some(b' ' | b'\t' | b'\r' | b'\n' | b'>')
            );
        if is_h1 {
            let open_end = start + memchr(b'>', &bytes[start..])?;
            let content_start = open_end + 1;
            let close = markup[content_start..]
                .as_bytes()
                .windows(5)
                .position(|w| w.eq_ignore_ascii_case(b"</h1>"))?;
            return Some(&markup[content_start..content_start + close]);
        }
        pos = start + 1;
    }

    None
}

/// Strip a trailing extension suffix: the last `.` followed by one or
/// more characters containing neither `.` nor `/`.
fn strip_extension(name: &str) -> &str {
    if let Some(pos) = name.rfind('.') {
        let suffix = &name[pos + 1..];
        if !suffix.is_empty() && !suffix.contains('.') && !suffix.contains('/') {
            return &name[..pos];
        }
    }
    name
}
