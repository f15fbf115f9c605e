//! `[i18n]` configuration.
//!
//! ```toml
//! [i18n]
//! default = "en"
//! locales = ["en", "fr"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LocaleAuthority;

/// Supported locales and the default one.
///
/// Tokens are lowercased and trimmed however the value is built, so they
/// compare equal to the locale token of a normalized content id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "I18nFields")]
pub struct I18nConfig {
    /// Locale whose routes carry no locale prefix.
    pub default: String,
    /// Every locale token a content id may start with.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

/// `[i18n]` table as written in the file.
#[derive(Deserialize)]
#[serde(default)]
struct I18nFields {
    default: String,
    locales: Vec<String>,
}

impl Default for I18nFields {
    fn default() -> Self {
        let I18nConfig { default, locales } = I18nConfig::default();
        Self { default, locales }
    }
}

impl From<I18nFields> for I18nConfig {
    fn from(fields: I18nFields) -> Self {
        Self::new(fields.default, fields.locales)
    }
}

impl I18nConfig {
    pub const DEFAULT: FieldPath = FieldPath::new("i18n.default");
    pub const LOCALES: FieldPath = FieldPath::new("i18n.locales");

    pub fn new(default: impl Into<String>, locales: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut config = Self {
            default: default.into(),
            locales: locales.into_iter().map(Into::into).collect(),
        };
        config.normalize();
        config
    }

    fn normalize(&mut self) {
        self.default = self.default.trim().to_ascii_lowercase();
        for locale in &mut self.locales {
            *locale = locale.trim().to_ascii_lowercase();
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error(Self::LOCALES, "at least one locale is required");
            return;
        }

        for (i, locale) in self.locales.iter().enumerate() {
            if locale.is_empty() || locale.contains('/') {
                diag.error(
                    Self::LOCALES,
                    format!("`{locale}` is not a valid locale token"),
                );
            } else if self.locales[..i].contains(locale) {
                diag.warn(Self::LOCALES, format!("`{locale}` is listed more than once"));
            }
        }

        if !self.locales.contains(&self.default) {
            diag.error_with_hint(
                Self::DEFAULT,
                format!("default locale `{}` is not in `i18n.locales`", self.default),
                format!("add \"{}\" to `i18n.locales`", self.default),
            );
        }
    }
}

impl LocaleAuthority for I18nConfig {
    fn is_supported_locale(&self, token: &str) -> bool {
        self.locales.iter().any(|l| l == token)
    }

    fn default_locale(&self) -> &str {
        &self.default
    }
}
