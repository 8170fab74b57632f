//! Post listing options: pagination, sidebar size, and sort order.

use crate::config::rule::{self, Choice, Result};
use crate::config::types::{ConfigError, FieldPath};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// How many posts a list shows: all of them, or a fixed count.
///
/// Written as `"ALL"` or a number in the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    All,
    Count(u64),
}

impl PageLimit {
    const ALL: &'static str = "ALL";

    /// Number of items to show out of `total`.
    pub fn resolve(self, total: usize) -> usize {
        match self {
            Self::All => total,
            Self::Count(n) => usize::try_from(n).map_or(total, |n| n.min(total)),
        }
    }

    /// Parse `"ALL"` or an integer no smaller than `min`.
    ///
    /// Any other string, and any non-number, is reported as
    /// `must be one of [ALL, number]`.
    pub fn parse(value: &Value, path: FieldPath, min: u64) -> Result<Self> {
        match value {
            Value::String(s) if s == Self::ALL => Ok(Self::All),
            Value::Number(_) => rule::integer(value, path, min).map(Self::Count),
            _ => Err(ConfigError::invalid(
                path,
                format!("must be one of [{}, number]", Self::ALL),
            )),
        }
    }
}

impl Serialize for PageLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(Self::ALL),
            Self::Count(n) => serializer.serialize_u64(*n),
        }
    }
}

/// `postsPerPage`: at least one post per page.
pub fn posts_per_page(value: &Value, path: FieldPath) -> Result<PageLimit> {
    PageLimit::parse(value, path, 1).map_err(|err| match err {
        ConfigError::Invalid(diag) if diag.constraint.starts_with("must be greater") => {
            ConfigError::Invalid(diag.with_hint("use \"ALL\" to show every post on one page"))
        }
        other => other,
    })
}

/// `blogSidebarCount`: zero hides the sidebar.
pub fn sidebar_count(value: &Value, path: FieldPath) -> Result<PageLimit> {
    PageLimit::parse(value, path, 0)
}

/// Order of posts in lists and feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPosts {
    /// Newest first (default).
    #[default]
    Descending,
    Ascending,
}

impl Choice for SortPosts {
    const NAMES: &'static [&'static str] = &["descending", "ascending"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "descending" => Some(Self::Descending),
            "ascending" => Some(Self::Ascending),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::Ascending => "ascending",
        }
    }
}
