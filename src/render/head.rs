//! `<head>` assembly.
//!
//! Emitted elements, in order: charset, viewport, title, description,
//! author, publisher, canonical, Open Graph, Twitter Card, hreflang
//! alternates, font preloads, AOS stylesheet, JSON-LD.

use crate::config::ShellConfig;
use crate::page::ResolvedPage;
use crate::seo::{OgTags, TwitterTags, jsonld};
use crate::utils::mime;

use super::Element;

/// Builds the `<head>` children of one page.
pub struct HeadBuilder<'a> {
    page: &'a ResolvedPage<'a>,
    shell: &'a ShellConfig,
}

impl<'a> HeadBuilder<'a> {
    pub fn new(page: &'a ResolvedPage<'a>, shell: &'a ShellConfig) -> Self {
        Self { page, shell }
    }

    pub fn build(&self) -> Vec<Element> {
        let mut head = Vec::new();
        self.push_document_meta(&mut head);
        self.push_social(&mut head);
        self.push_alternates(&mut head);
        self.push_fonts(&mut head);
        self.push_features(&mut head);
        self.push_structured_data(&mut head);
        head
    }

    /// Render children one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, element) in self.build().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            element.render_into(&mut out);
        }
        out
    }

    fn push_document_meta(&self, head: &mut Vec<Element>) {
        let props = self.page.props;
        let site = &props.site_config;

        head.push(Element::new("meta").attr("charset", "utf-8"));
        head.push(Element::meta_name(
            "viewport",
            "width=device-width, initial-scale=1",
        ));
        head.push(Element::new("title").text(props.title.as_str()));
        head.push(Element::meta_name("description", props.description.as_str()));
        head.push(Element::meta_name("author", site.author.as_str()));
        head.push(Element::meta_name("publisher", site.publisher.as_str()));

        if let Some(canonical) = &self.page.canonical {
            head.push(Element::link("canonical", canonical.as_str()));
        }
    }

    fn push_social(&self, head: &mut Vec<Element>) {
        let og = OgTags::from_page(self.page);
        for (property, content) in og.properties() {
            head.push(Element::meta_property(property, content));
        }

        let twitter = TwitterTags::from_og(self.shell.twitter_card, &og);
        for (name, content) in twitter.names() {
            head.push(Element::meta_name(name, content));
        }
    }

    fn push_alternates(&self, head: &mut Vec<Element>) {
        let alternates = &self.page.alternates;
        for alternate in &alternates.locales {
            head.push(
                Element::link("alternate", alternate.href.as_str())
                    .attr("hreflang", alternate.locale.as_str()),
            );
        }
        head.push(
            Element::link("alternate", alternates.x_default.as_str())
                .attr("hreflang", "x-default"),
        );
    }

    fn push_fonts(&self, head: &mut Vec<Element>) {
        for &font in &self.page.fonts {
            let mut link = Element::link("preload", font).attr("as", "font");
            if let Some(mime) = mime::font_from_url(font) {
                link = link.attr("type", mime);
            }
            head.push(link.flag("crossorigin"));
        }
    }

    fn push_features(&self, head: &mut Vec<Element>) {
        let stylesheet = self.shell.aos.stylesheet.trim();
        if self.page.features.aos && !stylesheet.is_empty() {
            head.push(Element::link("stylesheet", stylesheet));
        }
    }

    fn push_structured_data(&self, head: &mut Vec<Element>) {
        let Some(json) = self
            .page
            .props
            .structured_data
            .as_ref()
            .and_then(jsonld::serialize)
        else {
            return;
        };
        head.push(
            Element::new("script")
                .attr("type", "application/ld+json")
                .text(json),
        );
    }
}
