//! Render input: one page's props.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};

use super::Locale;

/// Deserialize an optional value, treating `null` and type mismatches as absent.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize an optional string, treating blank or non-string values as absent.
fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = deserialize_lenient(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Deserialize structured data, treating `null` as absent.
fn deserialize_structured_data<'de, D>(
    deserializer: D,
) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()))
}

/// Deserialize font URLs, keeping string entries only; `null` or any other
/// shape yields an empty list.
fn deserialize_fonts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let fonts = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(fonts)
}

/// Per-locale URL overrides for hreflang links.
///
/// Missing entries are derived from the site URL, see
/// [`HreflangPolicy`](super::HreflangPolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateUrls {
    #[serde(
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub fr: Option<String>,
    #[serde(
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub en: Option<String>,
}

impl AlternateUrls {
    /// Override for `locale`, if one was supplied and is not blank.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        let url = match locale {
            Locale::Fr => self.fr.as_deref(),
            Locale::En => self.en.as_deref(),
        };
        url.map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Props of one rendered page.
///
/// Required fields are constructor arguments; everything else is optional
/// and falls back to a default during rendering.
///
/// # Keys
///
/// | Key                      | Type            | Default                  |
/// |--------------------------|-----------------|--------------------------|
/// | `title`                  | `String`        | required                 |
/// | `description`            | `String`        | required                 |
/// | `lang`                   | `String`        | required                 |
/// | `siteConfig`             | `SiteConfig`    | required                 |
/// | `structuredData`         | JSON value      | no JSON-LD block         |
/// | `alternateUrls`          | `AlternateUrls` | derived per locale       |
/// | `ogImage`                | `String`        | site logo                |
/// | `ogImageAlt`             | `String`        | `"{site name} Logo"`     |
/// | `ogType`                 | `String`        | `"website"`              |
/// | `enableAOS`              | `bool`          | `true`                   |
/// | `enableFooterTransition` | `bool`          | `false`                  |
/// | `enableTypography`       | `bool`          | `true`                   |
/// | `customFonts`            | `Vec<String>`   | none                     |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    pub title: String,
    pub description: String,
    /// Language tag, e.g. `"fr-FR"` or `"en-US"`.
    pub lang: String,
    pub site_config: SiteConfig,

    #[serde(
        default,
        deserialize_with = "deserialize_structured_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub structured_data: Option<serde_json::Value>,

    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternate_urls: Option<AlternateUrls>,

    #[serde(
        default,
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub og_image: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub og_image_alt: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub og_type: Option<String>,

    #[serde(
        default,
        rename = "enableAOS",
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_aos: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_footer_transition: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_typography: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_fonts",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_fonts: Vec<String>,
}

impl PageProps {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        lang: impl Into<String>,
        site_config: SiteConfig,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lang: lang.into(),
            site_config,
            structured_data: None,
            alternate_urls: None,
            og_image: None,
            og_image_alt: None,
            og_type: None,
            enable_aos: None,
            enable_footer_transition: None,
            enable_typography: None,
            custom_fonts: Vec::new(),
        }
    }

    /// Parse and validate props from a JSON document (camelCase keys).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let props: Self = serde_json::from_str(json)?;
        props.validated()
    }

    /// Parse and validate props from a TOML document (camelCase keys).
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let props: Self = toml::from_str(content)?;
        props.validated()
    }

    /// Deserialized site configs skip `SiteConfig::new`, so check them here.
    fn validated(self) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site_config.validate(&mut diag);
        diag.into_result()?;
        Ok(self)
    }

    pub fn with_structured_data(mut self, data: serde_json::Value) -> Self {
        self.structured_data = Some(data).filter(|v| !v.is_null());
        self
    }

    pub fn with_alternate_urls(mut self, urls: AlternateUrls) -> Self {
        self.alternate_urls = Some(urls);
        self
    }

    pub fn with_og_image(mut self, image: impl Into<String>) -> Self {
        self.og_image = Some(image.into());
        self
    }

    pub fn with_og_image_alt(mut self, alt: impl Into<String>) -> Self {
        self.og_image_alt = Some(alt.into());
        self
    }

    pub fn with_og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn with_aos(mut self, enable: bool) -> Self {
        self.enable_aos = Some(enable);
        self
    }

    pub fn with_footer_transition(mut self, enable: bool) -> Self {
        self.enable_footer_transition = Some(enable);
        self
    }

    pub fn with_typography(mut self, enable: bool) -> Self {
        self.enable_typography = Some(enable);
        self
    }

    pub fn with_custom_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    /// Locale selected by `lang`, if it is one of the hreflang locales.
    pub fn locale(&self) -> Option<Locale> {
        Locale::from_lang(&self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "title": "Accueil",
        "description": "Bienvenue",
        "lang": "fr-FR",
        "siteConfig": {
            "name": "Acme",
            "author": "Alice",
            "publisher": "Acme SAS",
            "baseUrl": "https://acme.example"
        },
        "structuredData": null,
        "alternateUrls": { "en": "" },
        "ogImageAlt": "  ",
        "enableAOS": false,
        "customFonts": ["/fonts/inter.woff2"]
    }"#;

    #[test]
    fn test_from_json_maps_camel_case_keys() {
        let props = PageProps::from_json(JSON).unwrap();
        assert_eq!(props.title, "Accueil");
        assert_eq!(props.site_config.name, "Acme");
        assert_eq!(props.enable_aos, Some(false));
        assert_eq!(props.enable_typography, None);
        assert_eq!(props.custom_fonts, vec!["/fonts/inter.woff2"]);
        assert_eq!(props.locale(), Some(Locale::Fr));
    }

    #[test]
    fn test_blank_optionals_become_absent() {
        let props = PageProps::from_json(JSON).unwrap();
        assert_eq!(props.structured_data, None);
        assert_eq!(props.og_image_alt, None);
        let urls = props.alternate_urls.unwrap();
        assert_eq!(urls.en, None);
        assert_eq!(urls.get(Locale::En), None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = PageProps::from_json(r#"{"title": "x", "description": "y", "lang": "en"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_toml() {
        let props = PageProps::from_toml(
            r#"
title = "Home"
description = "Welcome"
lang = "en-US"
ogType = "article"

[siteConfig]
name = "Acme"
author = "Alice"
publisher = "Acme SAS"
baseUrl = "https://acme.example"

[alternateUrls]
fr = "https://acme.example/fr/accueil"
"#,
        )
        .unwrap();
        assert_eq!(props.og_type.as_deref(), Some("article"));
        assert_eq!(
            props.alternate_urls.unwrap().get(Locale::Fr),
            Some("https://acme.example/fr/accueil")
        );
    }

    #[test]
    fn test_builder_drops_null_structured_data() {
        let site = SiteConfig::new("Acme", "Alice", "Acme SAS", "https://acme.example").unwrap();
        let props =
            PageProps::new("t", "d", "en", site).with_structured_data(serde_json::Value::Null);
        assert_eq!(props.structured_data, None);
    }

    #[test]
    fn test_mistyped_optionals_fall_back() {
        let props = PageProps::from_json(
            r#"{
                "title": "Home",
                "description": "Welcome",
                "lang": "en",
                "siteConfig": {
                    "name": "Acme",
                    "author": "Alice",
                    "publisher": "Acme SAS",
                    "baseUrl": "https://acme.example"
                },
                "customFonts": null,
                "enableAOS": "false",
                "enableTypography": null,
                "ogImage": 5,
                "ogType": ["article"],
                "alternateUrls": "https://acme.example/fr"
            }"#,
        )
        .unwrap();
        assert!(props.custom_fonts.is_empty());
        assert_eq!(props.enable_aos, None);
        assert_eq!(props.enable_typography, None);
        assert_eq!(props.og_image, None);
        assert_eq!(props.og_type, None);
        assert_eq!(props.alternate_urls, None);
    }

    #[test]
    fn test_fonts_keep_string_entries_only() {
        let props = PageProps::from_toml(
            r#"
title = "Home"
description = "Welcome"
lang = "en"
customFonts = ["/a.woff2", 3, "/b.woff"]

[siteConfig]
name = "Acme"
author = "Alice"
publisher = "Acme SAS"
baseUrl = "https://acme.example"
"#,
        )
        .unwrap();
        assert_eq!(props.custom_fonts, vec!["/a.woff2", "/b.woff"]);
    }

    #[test]
    fn test_invalid_site_config_is_rejected() {
        let blank_name = r#"{
            "title": "t", "description": "d", "lang": "en",
            "siteConfig": {
                "name": "", "author": "Alice", "publisher": "Acme SAS",
                "baseUrl": "https://acme.example"
            }
        }"#;
        match PageProps::from_json(blank_name) {
            Err(ConfigError::Diagnostics(diag)) => {
                assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.name);
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }

        let mailto = r#"{
            "title": "t", "description": "d", "lang": "en",
            "siteConfig": {
                "name": "Acme", "author": "Alice", "publisher": "Acme SAS",
                "baseUrl": "mailto:a@b.c"
            }
        }"#;
        assert!(matches!(
            PageProps::from_json(mailto),
            Err(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_from_toml_validates_site_config() {
        let result = PageProps::from_toml(
            r#"
title = "Home"
description = "Welcome"
lang = "en"

[siteConfig]
name = "Acme"
author = " "
publisher = "Acme SAS"
baseUrl = "https://acme.example"
"#,
        );
        assert!(matches!(result, Err(ConfigError::Diagnostics(_))));
    }
}
