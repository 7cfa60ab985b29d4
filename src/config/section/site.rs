//! `[site]` section configuration.
//!
//! Site-wide identity shared by every rendered page.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Acme"
//! author = "Alice Martin"
//! publisher = "Acme SAS"
//! base_url = "https://acme.example"
//! ```

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use url::Url;

/// Site identity used for `og:site_name`, author/publisher meta tags and
/// as the base for every derived URL.
///
/// Accepts both `base_url` (TOML) and `baseUrl` (JSON props) keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site name (`og:site_name`, default image alt text).
    pub name: String,

    /// Author name (`<meta name="author">`).
    pub author: String,

    /// Publisher name (`<meta name="publisher">`).
    pub publisher: String,

    /// Absolute site URL, e.g. `https://example.com`.
    #[serde(alias = "base_url")]
    pub base_url: Url,
}

/// Field paths for `[site]` diagnostics.
pub struct SiteConfigFields {
    pub name: FieldPath,
    pub author: FieldPath,
    pub publisher: FieldPath,
    pub base_url: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        name: FieldPath::new("site.name"),
        author: FieldPath::new("site.author"),
        publisher: FieldPath::new("site.publisher"),
        base_url: FieldPath::new("site.base_url"),
    };

    /// Build a validated site config.
    ///
    /// Fails with every diagnostic at once when a field is empty or the
    /// URL is not an absolute http(s) URL.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        let base_url = match Url::parse(base_url) {
            Ok(url) => url,
            Err(e) => {
                let mut diag = ConfigDiagnostics::new();
                diag.error_with_hint(
                    Self::FIELDS.base_url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
                return Err(diag.into());
            }
        };

        let config = Self {
            name: name.into(),
            author: author.into(),
            publisher: publisher.into(),
            base_url,
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.into_result()?;
        Ok(config)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name`, `author`, `publisher` must not be blank
    /// - `base_url` must use http or https and have a host
    /// - a query string or fragment on `base_url` is only warned about
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let required = [
            (Self::FIELDS.name, &self.name),
            (Self::FIELDS.author, &self.author),
            (Self::FIELDS.publisher, &self.publisher),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        let url = &self.base_url;
        if !matches!(url.scheme(), "http" | "https") {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("scheme '{}' not supported, must be http or https", url.scheme()),
                "use format like https://example.com",
            );
        }
        if url.host_str().is_none() {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                "URL must have a valid host",
                "use format like https://example.com",
            );
        }
        if url.query().is_some() || url.fragment().is_some() {
            diag.warn(
                Self::FIELDS.base_url,
                "query string and fragment are dropped when deriving page URLs",
            );
        }
    }

    /// Base URL as a directory, so relative joins append instead of
    /// replacing the last path segment.
    ///
    /// `https://example.com/blog` becomes `https://example.com/blog/`.
    pub fn base_dir(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    /// Resolve a site-relative or absolute reference against the base URL.
    ///
    /// Absolute URLs are returned unchanged and protocol-relative ones
    /// (`//cdn.example/a.png`) take the base scheme. A single leading slash
    /// stays relative to the base path so sites deployed under a
    /// subdirectory keep working.
    pub fn resolve(&self, reference: &str) -> String {
        if let Ok(absolute) = Url::parse(reference) {
            return absolute.into();
        }
        let base = self.base_dir();
        if reference.starts_with("//")
            && let Ok(url) = base.join(reference)
        {
            return url.into();
        }
        let path = reference.trim_start_matches('/');
        match base.join(path) {
            Ok(url) => url.into(),
            Err(_) => format!("{base}{path}"),
        }
    }
}
