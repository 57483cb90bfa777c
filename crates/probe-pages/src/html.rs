//! HTML output helpers.

use std::borrow::Cow;

/// Escape untrusted text for embedding in HTML.
///
/// Every request-derived value must pass through here before being written
/// into a document. Covers the characters that can open markup or break out
/// of an attribute: `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
