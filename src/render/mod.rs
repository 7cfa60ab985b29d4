//! Page shell rendering.
//!
//! [`PageShell`] resolves defaults, builds the head and collects the
//! trailing body scripts. Rendering is pure: the same props and config
//! always produce byte-identical markup.

mod document;
mod element;
mod head;

pub use document::DocumentMarkup;
pub use element::Element;
pub use head::HeadBuilder;

use std::sync::LazyLock;

use serde_json::json;

use crate::config::ShellConfig;
use crate::page::{PageProps, ResolvedPage};

/// Options used when no `[shell]` config is given.
static DEFAULT_SHELL: LazyLock<ShellConfig> = LazyLock::new(ShellConfig::default);

/// Render `props` with default shell options.
pub fn render(props: &PageProps) -> DocumentMarkup {
    PageShell::new(props).render()
}

/// The page layout component.
pub struct PageShell<'a> {
    props: &'a PageProps,
    config: &'a ShellConfig,
}

impl<'a> PageShell<'a> {
    pub fn new(props: &'a PageProps) -> Self {
        Self {
            props,
            config: &DEFAULT_SHELL,
        }
    }

    /// Use explicit shell options instead of the defaults.
    pub fn with_config(mut self, config: &'a ShellConfig) -> Self {
        self.config = config;
        self
    }

    pub fn render(&self) -> DocumentMarkup {
        let page = ResolvedPage::resolve(self.props, self.config);
        let head = HeadBuilder::new(&page, self.config).render();

        DocumentMarkup {
            lang: self.props.lang.trim().to_string(),
            head,
            features: page.features,
            body_end: self.body_end(&page),
        }
    }

    /// AOS script and init call, when AOS is enabled.
    fn body_end(&self, page: &ResolvedPage<'_>) -> String {
        let aos = &self.config.aos;
        let script = aos.script.trim();
        if !page.features.aos || script.is_empty() {
            return String::new();
        }

        let options = json!({ "duration": aos.duration, "once": aos.once });
        let init = format!("AOS.init({options});");
        [
            Element::new("script").attr("src", script),
            Element::new("script").text(init),
        ]
        .iter()
        .map(Element::render)
        .collect::<Vec<_>>()
        .join("\n")
    }
}
