//! MIME type detection for preloaded assets.

/// Font MIME type constants.
pub mod types {
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
    pub const EOT: &str = "application/vnd.ms-fontobject";
}

/// Guess a font MIME type from a URL.
///
/// Query strings and fragments are ignored. Returns `None` for unknown
/// extensions so the preload link can omit `type` instead of lying.
pub fn font_from_url(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let ext = file.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("woff") => Some(types::WOFF),
        Some("woff2") => Some(types::WOFF2),
        Some("ttf") => Some(types::TTF),
        Some("otf") => Some(types::OTF),
        Some("eot") => Some(types::EOT),
        _ => None,
    }
}
