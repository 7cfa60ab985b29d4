//! Page types: props, locales, alternates and default resolution.

mod hreflang;
mod locale;
mod meta;
mod props;

pub use hreflang::{Alternate, Alternates, HreflangPolicy};
pub use locale::{Locale, og_locale};
pub use meta::{DEFAULT_OG_TYPE, Features, ResolvedPage};
pub use props::{AlternateUrls, PageProps};
