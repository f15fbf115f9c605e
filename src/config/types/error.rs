//! Errors and diagnostics for `index.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read index config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("index config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the config.
    Error,
    /// Reported, the config is still used.
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(severity: Severity, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            severity,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Renders as `` `i18n.default`: message (hint: ...) `` on a single line.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " {}", format_args!("(hint: {hint})").dimmed())?;
        }
        Ok(())
    }
}

/// Findings collected while validating every section.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(Severity::Error, field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(ConfigDiagnostic::new(Severity::Error, field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(Severity::Warning, field, message));
    }

    pub fn warn_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(ConfigDiagnostic::new(Severity::Warning, field, message).with_hint(hint));
    }

    pub fn errors(&self) -> Vec<&ConfigDiagnostic> {
        self.items.iter().filter(|d| d.is_error()).collect()
    }

    pub fn warnings(&self) -> Vec<&ConfigDiagnostic> {
        self.items.iter().filter(|d| !d.is_error()).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(ConfigDiagnostic::is_error)
    }

    /// Number of errors; warnings are not counted.
    pub fn len(&self) -> usize {
        self.items.iter().filter(|d| d.is_error()).count()
    }

    /// True when there is no error, even if warnings were collected.
    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    pub fn print_warnings(&self) {
        for warning in self.warnings() {
            crate::log!("warning"; "index config: {}", warning);
        }
    }

    /// `Err(self)` when at least one error was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors();
        let noun = if errors.len() == 1 { "error" } else { "errors" };
        write!(f, "index config has {} {noun}:", errors.len())?;
        for error in errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
