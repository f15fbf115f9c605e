//! Index configuration management for `index.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── i18n       # [i18n]
//! │   └── collections # [collections]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # IndexConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[i18n]`         | Supported locale tokens and the default locale |
//! | `[collections]`  | Collections to fetch and the routable subset   |

pub mod section;
pub mod types;

pub use section::{CollectionsConfig, I18nConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing `index.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Collection settings
    #[serde(default)]
    pub collections: CollectionsConfig,
}

impl IndexConfig {
    pub fn new(i18n: I18nConfig, collections: CollectionsConfig) -> Self {
        Self {
            config_path: PathBuf::new(),
            i18n,
            collections,
        }
    }

    /// Parse configuration from TOML string and validate it.
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, None);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, Some(path));
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: Option<&Path>) {
        let display_path = path
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".to_string());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.i18n.validate(&mut diag);
        self.collections.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config without validation.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IndexConfig {
    let (parsed, ignored) = IndexConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
