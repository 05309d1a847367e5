//! Entity escaping for generated markup.

/// Escape special markup characters.
///
/// Single pass: an entity introduced for one character is never rewritten
/// for another, and reapplying the transform stays lossless.
///
/// # Examples
///
/// ```
/// use contour::html::escape;
///
/// assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Decode the entities [`escape`] emits, plus the `&#039;` and `&apos;`
/// spellings of the apostrophe seen in externally converted markup.
///
/// Unknown entities are left untouched.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        result.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let mut matched = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&#039;", '\''),
            ("&apos;", '\''),
        ] {
            if let Some(tail) = rest.strip_prefix(entity) {
                result.push(ch);
                rest = tail;
                matched = true;
                break;
            }
        }

        if !matched {
            result.push('&');
            rest = &rest[1..];
        }
    }

    result.push_str(rest);
    result
}
