//! JSON-LD structured data serialization.

use serde_json::Value;

/// Compact JSON for an inline `<script type="application/ld+json">`.
///
/// Returns `None` for `null`. Key order is preserved as given. The result is
/// raw script text; the element builder guards it against `</script>`.
pub fn serialize(data: &Value) -> Option<String> {
    if data.is_null() {
        return None;
    }
    serde_json::to_string(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preserves_key_order() {
        let data = json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Acme"
        });
        assert_eq!(
            serialize(&data).unwrap(),
            r#"{"@context":"https://schema.org","@type":"Organization","name":"Acme"}"#
        );
    }

    #[test]
    fn test_null_is_skipped() {
        assert_eq!(serialize(&Value::Null), None);
    }
}
