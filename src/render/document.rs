//! Full document shell around rendered head content.

use std::fmt;

use crate::page::Features;
use crate::utils::html::escape_attr;

/// Output of one render: head markup plus everything needed to wrap a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMarkup {
    /// `lang` attribute of `<html>`.
    pub lang: String,
    /// Rendered `<head>` children, one per line.
    pub head: String,
    /// Resolved feature toggles.
    pub features: Features,
    /// Scripts appended at the end of `<body>`.
    pub body_end: String,
}

impl DocumentMarkup {
    /// Full document with `body` placed inside `<main>`.
    ///
    /// Feature toggles land on the `<html>` root: `aos`/`typography`
    /// classes and a `data-footer-transition` attribute.
    ///
    /// `body` is trusted markup and is inserted as-is.
    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.head.len() + body.len() + 256);
        out.push_str("<!DOCTYPE html>\n");

        out.push_str("<html lang=\"");
        out.push_str(&escape_attr(&self.lang));
        out.push('"');
        if let Some(classes) = self.features.root_classes() {
            out.push_str(" class=\"");
            out.push_str(&classes);
            out.push('"');
        }
        if self.features.footer_transition {
            out.push_str(" data-footer-transition");
        }
        out.push_str(">\n");

        out.push_str("<head>\n");
        out.push_str(&self.head);
        out.push_str("\n</head>\n");

        out.push_str("<body>\n<main>");
        out.push_str(body);
        out.push_str("</main>\n");
        if !self.body_end.is_empty() {
            out.push_str(&self.body_end);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl fmt::Display for DocumentMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wrap(""))
    }
}
