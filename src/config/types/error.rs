//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Plugin options errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - the diagnostic is the whole message
    #[error("{0}")]
    Invalid(ConfigDiagnostic),
}

impl ConfigError {
    /// Invalid option at `field`, violating `constraint`.
    pub fn invalid(field: FieldPath, constraint: impl Into<String>) -> Self {
        Self::Invalid(ConfigDiagnostic::new(field, constraint))
    }

    /// Invalid option with a fix hint.
    pub fn invalid_with_hint(
        field: FieldPath,
        constraint: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Invalid(ConfigDiagnostic::new(field, constraint).with_hint(hint))
    }

    /// The diagnostic, if this is a validation failure.
    pub const fn diagnostic(&self) -> Option<&ConfigDiagnostic> {
        match self {
            Self::Invalid(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Option path (e.g., "feedOptions.type")
    pub field: FieldPath,
    /// Violated constraint (e.g., "must be a string")
    pub constraint: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, constraint: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Human-readable message, e.g. `"tags" must be a string`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Multi-line colored rendering for terminals.
    ///
    /// Colors are dropped when stderr is not a terminal.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{}{}{}\n{} {}",
            "[".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            self.field
                .as_str()
                .if_supports_color(Stream::Stderr, |s| s.cyan()),
            "]".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            "→".if_supports_color(Stream::Stderr, |s| s.red()),
            self.constraint,
        );
        if let Some(hint) = &self.hint {
            out.push_str(&format!(
                "\n  {} {}",
                "hint:".if_supports_color(Stream::Stderr, |s| s.yellow()),
                hint
            ));
        }
        out
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.field, self.constraint)
    }
}

impl std::error::Error for ConfigDiagnostic {}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Non-fatal findings collected during validation.
///
/// Errors abort validation immediately; warnings are gathered here and
/// printed in one batch after a successful pass.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning (ignored or ineffective options).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "options with no effect:");
        for warning in &self.warnings {
            eprintln!("- {warning}");
        }
    }
}
