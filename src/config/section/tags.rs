//! Tags file and inline-metadata reporting options.

use crate::config::rule::{self, Choice, Result};
use crate::config::types::{ConfigError, FieldPath};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The `tags` option: a predefined tags file, or tags disabled.
///
/// `null` and `false` both disable the tags file but are kept apart so the
/// options serialize back exactly as they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagsFile {
    /// Not configured; the content pipeline picks its own default.
    #[default]
    Unset,
    /// Explicit `null`.
    Null,
    /// Explicit `false`.
    Disabled,
    /// Path to the tags file, relative to the blog content directory.
    Path(String),
}

impl TagsFile {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether the tags file was switched off with `null` or `false`.
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Null | Self::Disabled)
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Non-empty string, `null`, or `false`.
    pub fn parse(value: &Value, path: FieldPath) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(false) => Ok(Self::Disabled),
            Value::String(s) if s.is_empty() => {
                Err(ConfigError::invalid(path, "contains an invalid value"))
            }
            Value::String(s) => Ok(Self::Path(s.clone())),
            _ => Err(ConfigError::invalid(path, "must be a string")),
        }
    }
}

impl Serialize for TagsFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Path(path) => serializer.serialize_str(path),
        }
    }
}

/// What to do when a post uses tags or authors not declared up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    Ignore,
    Log,
    #[default]
    Warn,
    Throw,
}

impl Choice for ReportingSeverity {
    const NAMES: &'static [&'static str] = &["ignore", "log", "warn", "throw"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "ignore" => Some(Self::Ignore),
            "log" => Some(Self::Log),
            "warn" => Some(Self::Warn),
            "throw" => Some(Self::Throw),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }
}

pub fn severity(value: &Value, path: FieldPath) -> Result<ReportingSeverity> {
    rule::choice(value, path)
}
