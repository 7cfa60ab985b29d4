//! SEO metadata: Open Graph, Twitter Card and JSON-LD.

pub mod jsonld;
pub mod og;

pub use og::{OgTags, TwitterTags};
