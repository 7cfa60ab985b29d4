//! Locales known to the hreflang system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale with its own alternate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fr,
    En,
}

impl Locale {
    /// Every locale, in hreflang emission order.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Language subtag used in URLs and `hreflang` attributes.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Match a BCP-47 tag by its primary subtag.
    ///
    /// `"fr-FR"`, `"fr"` and `"FR_ca"` all map to [`Locale::Fr`].
    pub fn from_lang(lang: &str) -> Option<Self> {
        let primary = lang.trim().split(['-', '_']).next()?;
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open Graph locale form of a language tag: `en-US` → `en_US`.
pub fn og_locale(lang: &str) -> String {
    lang.trim().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lang_uses_primary_subtag() {
        assert_eq!(Locale::from_lang("fr-FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_lang("en"), Some(Locale::En));
        assert_eq!(Locale::from_lang("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::from_lang("de-DE"), None);
        assert_eq!(Locale::from_lang(""), None);
    }

    #[test]
    fn test_og_locale() {
        assert_eq!(og_locale("en-US"), "en_US");
        assert_eq!(og_locale("fr"), "fr");
    }
}
