//! Default resolution of page props.
//!
//! Every optional prop is resolved independently:
//!
//! | Prop                     | Default                                    |
//! |--------------------------|--------------------------------------------|
//! | `og_type`                | `"website"`                                |
//! | `og_image`               | `[shell] default_og_image` on the site URL |
//! | `og_image_alt`           | `"{site name} Logo"`                       |
//! | `enable_aos`             | `true`                                     |
//! | `enable_footer_transition` | `false`                                  |
//! | `enable_typography`      | `true`                                     |
//! | alternate URLs           | [`HreflangPolicy`](super::HreflangPolicy)  |

use rustc_hash::FxHashSet;

use crate::config::ShellConfig;

use super::{Alternates, Locale, PageProps};

pub const DEFAULT_OG_TYPE: &str = "website";

/// Feature toggles after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub aos: bool,
    pub footer_transition: bool,
    pub typography: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            aos: true,
            footer_transition: false,
            typography: true,
        }
    }
}

impl Features {
    fn from_props(props: &PageProps) -> Self {
        let default = Self::default();
        Self {
            aos: props.enable_aos.unwrap_or(default.aos),
            footer_transition: props
                .enable_footer_transition
                .unwrap_or(default.footer_transition),
            typography: props.enable_typography.unwrap_or(default.typography),
        }
    }

    /// Classes for the `<html>` root, space separated.
    pub fn root_classes(&self) -> Option<String> {
        let classes: Vec<&str> = [(self.aos, "aos"), (self.typography, "typography")]
            .into_iter()
            .filter_map(|(enabled, class)| enabled.then_some(class))
            .collect();
        (!classes.is_empty()).then(|| classes.join(" "))
    }
}

/// Page props with every default applied.
#[derive(Debug, Clone)]
pub struct ResolvedPage<'a> {
    pub props: &'a PageProps,
    pub og_type: &'a str,
    pub og_image: String,
    pub og_image_alt: String,
    pub features: Features,
    pub alternates: Alternates,
    /// URL of the page in its own locale, if `lang` is a known locale.
    pub canonical: Option<String>,
    /// Font URLs, blank entries dropped and duplicates removed (first wins).
    pub fonts: Vec<&'a str>,
}

impl<'a> ResolvedPage<'a> {
    pub fn resolve(props: &'a PageProps, shell: &ShellConfig) -> Self {
        let site = &props.site_config;

        let og_type = non_blank(props.og_type.as_deref()).unwrap_or(DEFAULT_OG_TYPE);

        let og_image = match non_blank(props.og_image.as_deref()) {
            Some(image) => site.resolve(image),
            None => site.resolve(&shell.default_og_image),
        };

        let og_image_alt = match non_blank(props.og_image_alt.as_deref()) {
            Some(alt) => alt.to_string(),
            None => format!("{} Logo", site.name),
        };

        let alternates =
            Alternates::resolve(site, props.alternate_urls.as_ref(), shell.hreflang);
        let canonical = props
            .locale()
            .and_then(|locale: Locale| alternates.href(locale))
            .map(str::to_string);

        Self {
            props,
            og_type,
            og_image,
            og_image_alt,
            features: Features::from_props(props),
            alternates,
            canonical,
            fonts: dedup_fonts(&props.custom_fonts),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn dedup_fonts(fonts: &[String]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    fonts
        .iter()
        .map(|font| font.trim())
        .filter(|font| !font.is_empty() && seen.insert(*font))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn props() -> PageProps {
        let site = SiteConfig::new("Acme", "Alice", "Acme SAS", "https://acme.example").unwrap();
        PageProps::new("Home", "Welcome", "en-US", site)
    }

    #[test]
    fn test_defaults() {
        let props = props();
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        assert_eq!(page.og_type, "website");
        assert_eq!(page.og_image, "https://acme.example/logo.png");
        assert_eq!(page.og_image_alt, "Acme Logo");
        assert_eq!(page.features, Features::default());
        assert!(page.features.aos);
        assert!(!page.features.footer_transition);
        assert!(page.features.typography);
        assert_eq!(page.canonical.as_deref(), Some("https://acme.example/en/"));
        assert!(page.fonts.is_empty());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let props = props().with_og_type("  ").with_og_image_alt("").with_og_image(" ");
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        assert_eq!(page.og_type, "website");
        assert_eq!(page.og_image_alt, "Acme Logo");
        assert_eq!(page.og_image, "https://acme.example/logo.png");
    }

    #[test]
    fn test_overrides_are_kept() {
        let props = props()
            .with_og_type("article")
            .with_og_image("/img/cover.jpg")
            .with_og_image_alt("Cover")
            .with_aos(false)
            .with_footer_transition(true)
            .with_typography(false);
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        assert_eq!(page.og_type, "article");
        assert_eq!(page.og_image, "https://acme.example/img/cover.jpg");
        assert_eq!(page.og_image_alt, "Cover");
        assert_eq!(
            page.features,
            Features {
                aos: false,
                footer_transition: true,
                typography: false,
            }
        );
        assert_eq!(page.features.root_classes(), None);
    }

    #[test]
    fn test_unknown_language_has_no_canonical() {
        let mut props = props();
        props.lang = "de-DE".into();
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        assert_eq!(page.canonical, None);
    }

    #[test]
    fn test_fonts_deduplicated_in_order() {
        let props = props().with_custom_fonts(["/b.woff2", "", "/a.woff2", "/b.woff2 "]);
        let page = ResolvedPage::resolve(&props, &ShellConfig::default());
        assert_eq!(page.fonts, vec!["/b.woff2", "/a.woff2"]);
    }

    #[test]
    fn test_root_classes() {
        assert_eq!(
            Features::default().root_classes().as_deref(),
            Some("aos typography")
        );
    }
}
