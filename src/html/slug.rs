//! Anchor id generation for heading markers.

/// Generate an anchor id from a base name and a disambiguating counter.
///
/// Lower-cases the base, replaces every character outside `[a-z0-9]` with
/// `-`, and appends `-<counter>`. Runs of replaced characters are kept
/// as-is, so the output maps one-to-one back onto the input length.
///
/// Not globally unique: the same base at the same counter produces the
/// same id. Callers that need uniqueness must disambiguate themselves.
///
/// # Examples
///
/// ```
/// use contour::html::anchor_id;
///
/// assert_eq!(anchor_id("Chapter", 1), "chapter-1");
/// assert_eq!(anchor_id("dc:title", 3), "dc-title-3");
/// ```
pub fn anchor_id(base: &str, counter: usize) -> String {
    let mut id = String::with_capacity(base.len() + 4);
    for c in base.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
        } else {
            id.push('-');
        }
    }
    id.push('-');
    id.push_str(&counter.to_string());
    id
}

/// Generate a display-quality slug from text.
///
/// Converts text to lowercase, replaces whitespace and special characters
/// with hyphens, and removes consecutive/leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use contour::html::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                // Skip other characters
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
