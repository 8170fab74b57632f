//! Markdown processing options: plugin lists and admonitions.
//!
//! Plugins are checked for shape only; nothing here loads or runs them.
//!
//! # Example
//!
//! ```toml
//! remarkPlugins = [
//!     "remark-math",                                  # plain reference
//!     ["remark-emoji", { padSpaceAfter = true }],     # reference + options
//! ]
//!
//! [admonitions]
//! keywords = ["note", "danger"]
//! extendDefaults = true
//! ```

use crate::config::rule::{self, FieldRule, Result};
use crate::config::types::{ConfigError, FieldPath, RawTable};
use crate::field_rule;
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// Plugin entries
// ============================================================================

/// One entry of a remark/rehype/recma plugin list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginEntry {
    /// Plugin referenced by module name, used with its own defaults.
    Reference(String),
    /// Plugin given as a plain object.
    Object(Map<String, Value>),
    /// `[reference, options]` pair.
    WithOptions(String, Map<String, Value>),
}

impl PluginEntry {
    /// Module name of the plugin, if referenced by name.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Reference(name) | Self::WithOptions(name, _) => Some(name),
            Self::Object(_) => None,
        }
    }

    pub fn parse(value: &Value, path: FieldPath) -> Result<Self> {
        match value {
            Value::String(name) if !name.is_empty() => Ok(Self::Reference(name.clone())),
            Value::Object(map) => Ok(Self::Object(map.clone())),
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(name), Value::Object(options)] if !name.is_empty() => {
                    Ok(Self::WithOptions(name.clone(), options.clone()))
                }
                _ => Err(ConfigError::invalid_with_hint(
                    path,
                    "does not match any of the allowed types",
                    "a plugin with options is written as [\"plugin-name\", { ... }]",
                )),
            },
            _ => Err(ConfigError::invalid(
                path,
                "does not match any of the allowed types",
            )),
        }
    }
}

/// Array of plugin entries.
pub fn plugin_list(value: &Value, path: FieldPath) -> Result<Vec<PluginEntry>> {
    rule::array(value, &path)?
        .iter()
        .enumerate()
        .map(|(i, item)| PluginEntry::parse(item, path.index(i)))
        .collect()
}

// ============================================================================
// Admonitions
// ============================================================================

/// The `admonitions` option: on/off, or custom keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Admonitions {
    Enabled(bool),
    Custom(AdmonitionsConfig),
}

impl Default for Admonitions {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl Admonitions {
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Enabled(false))
    }

    pub fn parse(value: &Value, path: FieldPath) -> Result<Self> {
        match value {
            Value::Bool(enabled) => Ok(Self::Enabled(*enabled)),
            Value::Object(_) => {
                let mut table = RawTable::new(Some(value), path)?;
                let mut config = AdmonitionsConfig::default();
                rule::apply_rules(&mut config, &mut table, AdmonitionsConfig::RULES)?;
                table.finish()?;
                Ok(Self::Custom(config))
            }
            _ => Err(ConfigError::invalid(
                path,
                "must be a boolean or an object",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmonitionsConfig {
    /// Admonition keywords, e.g. `note`, `tip`.
    pub keywords: Vec<String>,
    /// Add `keywords` to the built-in set instead of replacing it.
    pub extend_defaults: bool,
}

impl AdmonitionsConfig {
    const RULES: &'static [FieldRule<Self>] = &[
        field_rule!("keywords" => keywords, rule::string_list),
        field_rule!("extendDefaults" => extend_defaults, rule::boolean),
    ];
}
