//! Feed (RSS/Atom/JSON) generation options.
//!
//! # Example
//!
//! ```toml
//! [feedOptions]
//! type = "all"                  # rss | atom | json | all, or a list
//! title = "Engineering blog"
//! copyright = "Copyright © 2026"
//! limit = 50                    # false for no limit
//! ```
//!
//! `type = "all"` expands to `["rss", "atom", "json"]`; leaving `type` out
//! gives `["rss", "atom"]`. A JSON `null` turns feeds off.

use crate::config::rule::{self, Choice, FieldRule, Result};
use crate::config::types::{ConfigDiagnostics, ConfigError, FieldPath, RawTable};
use crate::field_rule;
use serde::{Serialize, Serializer};
use serde_json::Value;

// ============================================================================
// Feed kinds
// ============================================================================

/// Feed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// RSS 2.0.
    Rss,
    /// Atom 1.0.
    Atom,
    /// JSON Feed 1.1.
    Json,
}

impl Choice for FeedKind {
    const NAMES: &'static [&'static str] = &["rss", "atom", "json"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "rss" => Some(Self::Rss),
            "atom" => Some(Self::Atom),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
            Self::Json => "json",
        }
    }
}

/// Ordered set of enabled feed kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedKinds(Vec<FeedKind>);

impl FeedKinds {
    /// Shorthand expanding to every kind.
    const ALL: &'static str = "all";

    pub fn all() -> Self {
        Self(vec![FeedKind::Rss, FeedKind::Atom, FeedKind::Json])
    }

    /// Insert `kind` unless already present.
    pub fn insert(&mut self, kind: FeedKind) {
        if !self.0.contains(&kind) {
            self.0.push(kind);
        }
    }

    pub fn contains(&self, kind: FeedKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = FeedKind> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the `type` option.
    ///
    /// Accepts `null` (feeds off), a kind, `"all"`, or a list of kinds.
    pub fn parse(value: &Value, path: FieldPath) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s == Self::ALL => Ok(Some(Self::all())),
            Value::String(s) => FeedKind::from_name(s)
                .map(|kind| Some(Self(vec![kind])))
                .ok_or_else(|| Self::mismatch(path)),
            Value::Array(items) => {
                let mut kinds = Self::default();
                for (i, item) in items.iter().enumerate() {
                    kinds.insert(rule::choice(item, path.index(i))?);
                }
                Ok(Some(kinds))
            }
            _ => Err(Self::mismatch(path)),
        }
    }

    fn mismatch(path: FieldPath) -> ConfigError {
        ConfigError::invalid_with_hint(
            path,
            "does not match any of the allowed types",
            "use one of rss, atom, json, all, a list of them, or null to disable feeds",
        )
    }
}

impl FromIterator<FeedKind> for FeedKinds {
    fn from_iter<I: IntoIterator<Item = FeedKind>>(iter: I) -> Self {
        let mut kinds = Self::default();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}

impl Serialize for FeedKinds {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}

// ============================================================================
// FeedOptions
// ============================================================================

/// Default number of posts per feed.
pub const DEFAULT_FEED_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedOptions {
    /// Enabled feed kinds, `None` when feeds are off.
    #[serde(rename = "type")]
    pub kinds: Option<FeedKinds>,

    /// Feed title, falls back to the site title downstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Feed description, falls back to the site tagline downstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub copyright: String,

    /// Feed language (e.g. "en", "zh-Hans").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Maximum number of posts per feed, `None` for no limit.
    pub limit: Option<u64>,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            kinds: Some([FeedKind::Rss, FeedKind::Atom].into_iter().collect()),
            title: None,
            description: None,
            copyright: String::new(),
            language: None,
            limit: Some(DEFAULT_FEED_LIMIT),
        }
    }
}

impl FeedOptions {
    const RULES: &'static [FieldRule<Self>] = &[
        field_rule!("type" => kinds, FeedKinds::parse),
        field_rule!("title" => title, rule::optional_string),
        field_rule!("description" => description, rule::optional_string),
        field_rule!("copyright" => copyright, rule::string),
        field_rule!("language" => language, rule::optional_string),
        field_rule!("limit" => limit, feed_limit),
    ];

    pub const fn is_enabled(&self) -> bool {
        self.kinds.is_some()
    }

    /// Enabled kinds; empty when feeds are off.
    pub fn kinds(&self) -> impl Iterator<Item = FeedKind> + '_ {
        self.kinds.iter().flat_map(FeedKinds::iter)
    }

    /// Validate `feedOptions` merged over the feed defaults.
    ///
    /// Nested keys the user leaves out keep their defaults.
    pub fn parse(value: &Value, path: FieldPath, diag: &mut ConfigDiagnostics) -> Result<Self> {
        let mut table = RawTable::new(Some(value), path)?;
        let mut options = Self::default();
        rule::apply_rules(&mut options, &mut table, Self::RULES)?;

        if !options.is_enabled() {
            for key in options.changed_feed_fields() {
                diag.warn(
                    table.path().child(key),
                    "has no effect because feeds are disabled",
                );
            }
        }

        table.finish()?;
        Ok(options)
    }

    /// Keys of feed-only fields that differ from their defaults.
    fn changed_feed_fields(&self) -> impl Iterator<Item = &'static str> {
        let defaults = Self::default();
        [
            ("title", self.title != defaults.title),
            ("description", self.description != defaults.description),
            ("copyright", self.copyright != defaults.copyright),
            ("language", self.language != defaults.language),
            ("limit", self.limit != defaults.limit),
        ]
        .into_iter()
        .filter_map(|(key, changed)| changed.then_some(key))
    }
}

/// Integer of at least 1, or `null`/`false` for no limit.
fn feed_limit(value: &Value, path: FieldPath) -> Result<Option<u64>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        _ => rule::integer(value, path, 1).map(Some),
    }
}
