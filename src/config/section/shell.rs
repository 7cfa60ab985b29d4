//! `[shell]` section configuration.
//!
//! Rendering options shared by every page of a site.
//!
//! # Example
//!
//! ```toml
//! [shell]
//! default_og_image = "images/og.png"
//! twitter_card = "summary"
//!
//! [shell.hreflang]
//! policy = "default-at-root"
//! default = "fr"
//!
//! [shell.aos]
//! duration = 600
//! once = false
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::HreflangPolicy;

/// Twitter card kind (`twitter:card`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
}

impl TwitterCard {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// AOS (animate on scroll) assets and init options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AosConfig {
    /// AOS stylesheet URL.
    pub stylesheet: String,
    /// AOS script URL.
    pub script: String,
    /// Animation duration in milliseconds.
    pub duration: u32,
    /// Animate only the first time an element scrolls into view.
    pub once: bool,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            stylesheet: "https://unpkg.com/aos@2.3.4/dist/aos.css".into(),
            script: "https://unpkg.com/aos@2.3.4/dist/aos.js".into(),
            duration: 800,
            once: true,
        }
    }
}

/// Shell rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Open Graph image used when a page sets none, relative to the site URL.
    pub default_og_image: String,

    /// `twitter:card` value.
    pub twitter_card: TwitterCard,

    /// Derivation of hreflang URLs missing from a page's overrides.
    pub hreflang: HreflangPolicy,

    /// AOS assets, used on pages with AOS enabled.
    pub aos: AosConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_og_image: "logo.png".into(),
            twitter_card: TwitterCard::default(),
            hreflang: HreflangPolicy::default(),
            aos: AosConfig::default(),
        }
    }
}

/// Field paths for `[shell]` diagnostics.
pub struct ShellConfigFields {
    pub default_og_image: FieldPath,
    pub aos_stylesheet: FieldPath,
    pub aos_script: FieldPath,
}

impl ShellConfig {
    pub const FIELDS: ShellConfigFields = ShellConfigFields {
        default_og_image: FieldPath::new("shell.default_og_image"),
        aos_stylesheet: FieldPath::new("shell.aos.stylesheet"),
        aos_script: FieldPath::new("shell.aos.script"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_og_image.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.default_og_image,
                "must not be empty",
                "set a path relative to the site URL, e.g.: \"logo.png\"",
            );
        }
        if self.aos.stylesheet.trim().is_empty() {
            diag.warn(Self::FIELDS.aos_stylesheet, "empty, AOS stylesheet is skipped");
        }
        if self.aos.script.trim().is_empty() {
            diag.warn(Self::FIELDS.aos_script, "empty, AOS script is skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Locale;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.default_og_image, "logo.png");
        assert_eq!(config.twitter_card.as_str(), "summary_large_image");
        assert_eq!(config.hreflang, HreflangPolicy::LocalePrefix);
        assert!(config.aos.once);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ShellConfig = toml::from_str(
            r#"
twitter_card = "summary"

[hreflang]
policy = "default-at-root"
default = "fr"

[aos]
duration = 400
"#,
        )
        .unwrap();
        assert_eq!(config.twitter_card, TwitterCard::Summary);
        assert_eq!(
            config.hreflang,
            HreflangPolicy::DefaultAtRoot {
                default: Locale::Fr
            }
        );
        assert_eq!(config.aos.duration, 400);
        assert!(config.aos.once);
        assert_eq!(config.default_og_image, "logo.png");
    }

    #[test]
    fn test_validate_blank_image() {
        let config = ShellConfig {
            default_og_image: " ".into(),
            ..ShellConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
