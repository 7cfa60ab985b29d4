//! pageshell - a page-layout shell for static sites.
//!
//! Renders the document shell of a page (head metadata, Open Graph and
//! Twitter tags, hreflang alternates, JSON-LD, font preloads and feature
//! toggles) from one [`PageProps`] value.
//!
//! ```ignore
//! let site = SiteConfig::new("Acme", "Alice", "Acme SAS", "https://acme.example")?;
//! let props = PageProps::new("Home", "Welcome", "en-US", site)
//!     .with_custom_fonts(["/fonts/inter.woff2"]);
//! let html = pageshell::render(&props).wrap("<h1>Hello</h1>");
//! ```

pub mod config;
pub mod logger;
pub mod page;
pub mod render;
pub mod seo;
pub mod utils;

pub use config::{ConfigDiagnostics, ConfigError, PageShellConfig, ShellConfig, SiteConfig};
pub use page::{AlternateUrls, Features, HreflangPolicy, Locale, PageProps};
pub use render::{DocumentMarkup, PageShell, render};
