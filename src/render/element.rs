//! Minimal HTML element builder.
//!
//! Attributes keep insertion order so output is byte-stable across runs.

use crate::utils::html::{escape, escape_attr, escape_script, is_raw_text_element, is_void_element};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    /// Script or style body, only guarded against early tag close.
    Raw(String),
}

/// One HTML element with attributes and optional text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    /// `None` value renders a boolean attribute (`crossorigin`, `defer`).
    attrs: Vec<(&'static str, Option<String>)>,
    content: Option<Content>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            content: None,
        }
    }

    /// `<meta name=".." content="..">`
    pub fn meta_name(name: &'static str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("name", name)
            .attr("content", content)
    }

    /// `<meta property=".." content="..">`
    pub fn meta_property(property: &'static str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("property", property)
            .attr("content", content)
    }

    /// `<link rel=".." href="..">`
    pub fn link(rel: &'static str, href: impl Into<String>) -> Self {
        Self::new("link").attr("rel", rel).attr("href", href)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    /// Set text content; escaped unless the element is `script`/`style`.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.content = Some(if is_raw_text_element(self.tag) {
            Content::Raw(text)
        } else {
            Content::Text(text)
        });
        self
    }

    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');

        if is_void_element(self.tag) {
            return;
        }

        match &self.content {
            Some(Content::Text(text)) => out.push_str(&escape(text)),
            Some(Content::Raw(raw)) => out.push_str(&escape_script(raw)),
            None => {}
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let meta = Element::meta_name("description", "a \"quoted\" <value>");
        assert_eq!(
            meta.render(),
            r#"<meta name="description" content="a &quot;quoted&quot; &lt;value&gt;">"#
        );
    }

    #[test]
    fn test_boolean_attribute() {
        let link = Element::link("preload", "/a.woff2").attr("as", "font").flag("crossorigin");
        assert_eq!(
            link.render(),
            r#"<link rel="preload" href="/a.woff2" as="font" crossorigin>"#
        );
    }

    #[test]
    fn test_text_is_escaped_but_script_is_raw() {
        assert_eq!(Element::new("title").text("A & B").render(), "<title>A &amp; B</title>");
        assert_eq!(
            Element::new("script").text("if (a && b) {}").render(),
            "<script>if (a && b) {}</script>"
        );
        assert_eq!(
            Element::new("script").text("\"</script>\"").render(),
            "<script>\"<\\/script>\"</script>"
        );
    }
}
