//! Configuration utility functions.

use super::ConfigError;
use serde_json::Value;
use std::path::Path;

/// Source format of an options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse `content` into a raw options value.
    pub fn parse(self, content: &str) -> Result<Value, ConfigError> {
        match self {
            Self::Toml => toml_to_json(content),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Parse TOML and re-express it as a JSON value.
///
/// TOML has no `null`; datetimes become their string form.
pub fn toml_to_json(content: &str) -> Result<Value, ConfigError> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(convert(toml::Value::Table(table)))
}

fn convert(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}

// ============================================================================
// tests
// ============================================================================
