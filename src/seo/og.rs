//! Open Graph and Twitter Card meta tags data.
//!
//! Provides pure data structures for OG tags generation.
//! Markup is produced by `render/head.rs`.

use crate::config::TwitterCard;
use crate::page::{ResolvedPage, og_locale};

/// Open Graph tags of one page, in emission order.
pub struct OgTags<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub site_name: &'a str,
    pub og_type: &'a str,
    pub url: Option<&'a str>,
    pub locale: String,
    pub image: &'a str,
    pub image_alt: &'a str,
}

impl<'a> OgTags<'a> {
    pub fn from_page(page: &'a ResolvedPage<'a>) -> Self {
        let props = page.props;
        Self {
            title: &props.title,
            description: &props.description,
            site_name: &props.site_config.name,
            og_type: page.og_type,
            url: page.canonical.as_deref(),
            locale: og_locale(&props.lang),
            image: &page.og_image,
            image_alt: &page.og_image_alt,
        }
    }

    /// `(property, content)` pairs for `<meta property=...>`.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        let mut tags = vec![
            ("og:title", self.title),
            ("og:description", self.description),
            ("og:site_name", self.site_name),
            ("og:type", self.og_type),
        ];
        if let Some(url) = self.url {
            tags.push(("og:url", url));
        }
        if !self.locale.is_empty() {
            tags.push(("og:locale", self.locale.as_str()));
        }
        tags.push(("og:image", self.image));
        tags.push(("og:image:alt", self.image_alt));
        tags
    }
}

/// Twitter Card tags, mirroring the OG title, description and image.
pub struct TwitterTags<'a> {
    pub card: TwitterCard,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub image_alt: &'a str,
}

impl<'a> TwitterTags<'a> {
    pub fn from_og(card: TwitterCard, og: &OgTags<'a>) -> Self {
        Self {
            card,
            title: og.title,
            description: og.description,
            image: og.image,
            image_alt: og.image_alt,
        }
    }

    /// `(name, content)` pairs for `<meta name=...>`.
    pub fn names(&self) -> [(&'static str, &str); 5] {
        [
            ("twitter:card", self.card.as_str()),
            ("twitter:title", self.title),
            ("twitter:description", self.description),
            ("twitter:image", self.image),
            ("twitter:image:alt", self.image_alt),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ShellConfig, SiteConfig};
    use crate::page::PageProps;

    #[test]
    fn test_og_properties_order() {
        let site = SiteConfig::new("Acme", "Alice", "Acme SAS", "https://acme.example").unwrap();
        let props = PageProps::new("Home", "Welcome", "en-US", site);
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        let og = OgTags::from_page(&page);

        let keys: Vec<_> = og.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            [
                "og:title",
                "og:description",
                "og:site_name",
                "og:type",
                "og:url",
                "og:locale",
                "og:image",
                "og:image:alt",
            ]
        );
        assert!(og.properties().contains(&("og:locale", "en_US")));

        let twitter = TwitterTags::from_og(TwitterCard::Summary, &og);
        assert_eq!(twitter.names()[0], ("twitter:card", "summary"));
        assert_eq!(twitter.names()[4], ("twitter:image:alt", "Acme Logo"));
    }
}
