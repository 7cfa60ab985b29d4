//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script()` - keep inline script content from closing its tag
//! - `is_void_element()` - Self-closing elements (meta, link, etc.)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape raw text placed inside `<script>`.
///
/// Script content is not entity-decoded, so only sequences that would end
/// the element or open a comment are rewritten: `</` → `<\/`, `<!--` →
/// `<\!--`. Both forms are equivalent inside JSON and JavaScript strings.
pub fn escape_script(s: &str) -> Cow<'_, str> {
    if !s.contains("</") && !s.contains("<!--") {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("</", "<\\/").replace("<!--", "<\\!--"))
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
///
/// Void elements cannot have children and are rendered without a closing tag.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if tag is a raw text element (content should not be HTML-escaped).
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("l'été"), "l&#39;été");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_script() {
        assert_eq!(
            escape_script(r#"{"a":"</script><script>"}"#),
            r#"{"a":"<\/script><script>"}"#
        );
        assert_eq!(escape_script("<!-- x"), "<\\!-- x");
        assert!(matches!(escape_script(r#"{"a":1}"#), Cow::Borrowed(_)));
    }

    #[test]
    fn test_element_classification() {
        assert!(is_void_element("meta"));
        assert!(is_void_element("link"));
        assert!(!is_void_element("title"));
        assert!(is_raw_text_element("script"));
        assert!(!is_raw_text_element("title"));
    }
}
