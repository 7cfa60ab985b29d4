//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pageshell.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `site`  | `[site]`     | Site identity (name, author, base URL)    |
//! | `shell` | `[shell]`    | Rendering options (hreflang, OG, AOS)     |

mod shell;
mod site;

pub use shell::{AosConfig, ShellConfig, TwitterCard};
pub use site::SiteConfig;
