//! Configuration management for `pageshell.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── shell      # [shell]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # PageShellConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `[site]`         | Site identity shared by every page              |
//! | `[shell]`        | Default OG image, twitter card, AOS assets      |
//! | `[shell.hreflang]` | Derivation of missing hreflang URLs           |

pub mod section;
pub mod types;

pub use section::{AosConfig, ShellConfig, SiteConfig, TwitterCard};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

/// Default config file name.
pub const CONFIG_FILE: &str = "pageshell.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `pageshell.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageShellConfig {
    /// Site identity
    pub site: SiteConfig,

    /// Rendering options
    #[serde(default)]
    pub shell: ShellConfig,
}

impl PageShellConfig {
    /// Load and validate a config file.
    ///
    /// Unknown keys are reported as warnings and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, reporting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.shell.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

impl FromStr for PageShellConfig {
    type Err = ConfigError;

    /// Parse and validate TOML content.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
