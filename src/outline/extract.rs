//! Heading extraction from linear markup.
//!
//! Works on any heading-tagged markup, whether synthesized by
//! [`crate::html::render`] or produced by an external package converter.
//! The scanner is byte-oriented and deliberately tolerant: converted
//! markup is HTML-ish and not guaranteed to be well-formed XML.

use memchr::memchr;

/// A heading marker discovered in linear markup, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Marker level, 1 through 6.
    pub level: u8,
    /// Text content with nested markup stripped and entities decoded.
    pub title: String,
    /// Anchor id: the marker's own, or a backfilled `section-<index>`.
    pub id: String,
}

/// Scan markup for `<h1>`–`<h6>` markers, in document order.
///
/// Returns the discovered headings and the markup with generated ids
/// attached back onto markers that had none, so later navigation can
/// target every heading. No heading is dropped, reordered, or
/// deduplicated. The backfill index is local to this call.
pub fn extract(markup: &str) -> (Vec<Heading>, String) {
    let bytes = markup.as_bytes();
    let mut headings = Vec::new();
    let mut out = String::with_capacity(markup.len());
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let tag_start = pos + offset;
        out.push_str(&markup[pos..tag_start]);

        let Some(level) = heading_level(bytes, tag_start) else {
            out.push('<');
            pos = tag_start + 1;
            continue;
        };

        // End of the open tag.
        let Some(gt_offset) = memchr(b'>', &bytes[tag_start..]) else {
            out.push_str(&markup[tag_start..]);
            pos = bytes.len();
            break;
        };
        let open_end = tag_start + gt_offset;

        let self_closing = bytes[open_end - 1] == b'/';
        let attrs_end = if self_closing { open_end - 1 } else { open_end };
        let attrs = &markup[tag_start + 3..attrs_end];

        let (inner, after) = if self_closing {
            ("", open_end + 1)
        } else {
            let content_start = open_end + 1;
            match find_close_tag(markup, content_start, level) {
                Some(close_start) => (
                    &markup[content_start..close_start],
                    close_start + "</hN>".len(),
                ),
                // Unterminated marker: runs to end of input.
                None => (&markup[content_start..], bytes.len()),
            }
        };

        let index = headings.len();
        let mut title = crate::html::unescape(&strip_tags(inner));
        if title.is_empty() {
            title = format!("Section {}", index + 1);
        }

        let id = match find_id_attr(attrs) {
            Some(existing) => {
                out.push_str(&markup[tag_start..after]);
                existing.to_string()
            }
            None => {
                let generated = format!("section-{index}");
                out.push_str(&markup[tag_start..tag_start + 3]);
                out.push_str(attrs);
                out.push_str(" id=\"");
                out.push_str(&generated);
                out.push('"');
                if self_closing {
                    out.push('/');
                }
                out.push('>');
                out.push_str(&markup[open_end + 1..after]);
                generated
            }
        };

        headings.push(Heading { level, title, id });
        pos = after;
    }

    out.push_str(&markup[pos..]);
    (headings, out)
}

/// If `start` points at a heading open tag (`<h1`–`<h6`, ASCII
/// case-insensitive, followed by a name terminator), return its level.
fn heading_level(bytes: &[u8], start: usize) -> Option<u8> {
    if start + 3 > bytes.len() {
        return None;
    }
    if !bytes[start + 1].eq_ignore_ascii_case(&b'h') {
        return None;
    }
    let digit = bytes[start + 2];
    if !(b'1'..=b'6').contains(&digit) {
        return None;
    }
    matches!(
        bytes.get(start + 3),
        Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/')
    )
    .then_some(digit - b'0')
}

/// Find the start of `</hN>` for the given level, at or after `from`.
fn find_close_tag(markup: &str, from: usize, level: u8) -> Option<usize> {
    let bytes = markup.as_bytes();
    let mut pos = from;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let start = pos + offset;
        if start + 4 < bytes.len()
            && bytes[start + 1] == b'/'
            && bytes[start + 2].eq_ignore_ascii_case(&b'h')
            && bytes[start + 3] == b'0' + level
            && bytes[start + 4] == b'>'
        {
            return Some(start);
        }
        pos = start + 1;
    }

    None
}

/// Extract the value of an `id` attribute from an open tag's attribute
/// region, if present.
fn find_id_attr(attrs: &str) -> Option<&str> {
    let bytes = attrs.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Attribute names start after whitespace.
        if !bytes[pos].is_ascii_whitespace() {
            pos += 1;
            continue;
        }
        let name_start = pos + 1;
        if bytes[name_start..]
            .get(..2)
            .is_some_and(|n| n.eq_ignore_ascii_case(b"id"))
        {
            // Exact name match: the next significant byte must be '='.
            let mut cursor = name_start + 2;
            while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
                cursor += 1;
            }
            if bytes.get(cursor) == Some(&b'=') {
                cursor += 1;
                while bytes.get(cursor).is_some_and(|b| b.is_ascii_whitespace()) {
                    cursor += 1;
                }
                if let Some(&quote) = bytes.get(cursor)
                    && (quote == b'"' || quote == b'\'')
                {
                    let value_start = cursor + 1;
                    if let Some(end) = memchr(quote, &bytes[value_start..]) {
                        return Some(&attrs[value_start..value_start + end]);
                    }
                }
            }
        }
        pos += 1;
    }

    None
}

/// Remove every `<...>` span from markup, keeping the text between them.
pub(crate) fn strip_tags(markup: &str) -> String {
    let mut result = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        result.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => return result,
        }
    }

    result.push_str(rest);
    result
}
