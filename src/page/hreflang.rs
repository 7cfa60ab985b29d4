//! Hreflang alternate URL resolution.
//!
//! Overrides from [`AlternateUrls`] win; missing locales are derived from
//! the site base URL by a [`HreflangPolicy`].

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::debug;

use super::{AlternateUrls, Locale};

/// How missing alternate URLs are derived from the site base URL.
///
/// ```toml
/// [shell.hreflang]
/// policy = "default-at-root"
/// default = "fr"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum HreflangPolicy {
    /// Every locale lives under `{base}/{locale}/`; `x-default` is the base.
    #[default]
    LocalePrefix,
    /// `default` lives at the base, other locales under `{base}/{locale}/`;
    /// `x-default` is the default locale's URL.
    DefaultAtRoot { default: Locale },
}

impl HreflangPolicy {
    /// Derived URL for `locale`.
    pub fn derive(&self, site: &SiteConfig, locale: Locale) -> String {
        match self {
            Self::DefaultAtRoot { default } if *default == locale => site.base_dir().into(),
            _ => site.resolve(&format!("{}/", locale.as_str())),
        }
    }

    /// URL for the `x-default` alternate.
    fn x_default(&self, site: &SiteConfig, alternates: &[Alternate]) -> String {
        match self {
            Self::LocalePrefix => site.base_dir().into(),
            Self::DefaultAtRoot { default } => alternates
                .iter()
                .find(|alt| alt.locale == *default)
                .map(|alt| alt.href.clone())
                .unwrap_or_else(|| site.base_dir().into()),
        }
    }
}

/// One resolved `<link rel="alternate">` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub locale: Locale,
    pub href: String,
    /// `true` when the URL came from the policy rather than an override.
    pub derived: bool,
}

/// All alternates of one page, including `x-default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternates {
    pub locales: Vec<Alternate>,
    pub x_default: String,
}

impl Alternates {
    pub fn resolve(
        site: &SiteConfig,
        overrides: Option<&AlternateUrls>,
        policy: HreflangPolicy,
    ) -> Self {
        let locales: Vec<Alternate> = Locale::ALL
            .iter()
            .map(|&locale| match overrides.and_then(|urls| urls.get(locale)) {
                Some(href) => Alternate {
                    locale,
                    href: href.to_string(),
                    derived: false,
                },
                None => Alternate {
                    locale,
                    href: policy.derive(site, locale),
                    derived: true,
                },
            })
            .collect();

        for alt in locales.iter().filter(|alt| alt.derived) {
            debug!("hreflang"; "derived {} alternate: {}", alt.locale, alt.href);
        }

        let x_default = policy.x_default(site, &locales);
        Self { locales, x_default }
    }

    /// URL of `locale`, used as the page's canonical URL.
    pub fn href(&self, locale: Locale) -> Option<&str> {
        self.locales
            .iter()
            .find(|alt| alt.locale == locale)
            .map(|alt| alt.href.as_str())
    }
}
