//! Option validation for a static site generator's blog content plugin.
//!
//! Takes the plugin options a user wrote (possibly partial, possibly absent),
//! fills in defaults, expands shorthands, and rejects invalid values with a
//! message naming the option and the broken constraint:
//!
//! ```
//! use blog_plugin_options::{FeedKind, PageLimit, validate};
//! use serde_json::json;
//!
//! let options = validate(Some(&json!({
//!     "postsPerPage": "ALL",
//!     "feedOptions": { "type": "all" },
//! })))
//! .unwrap();
//! assert_eq!(options.posts_per_page, PageLimit::All);
//! assert!(options.feed_options.kinds().eq([FeedKind::Rss, FeedKind::Atom, FeedKind::Json]));
//!
//! let err = validate(Some(&json!({ "blogSidebarCount": "abcdef" }))).unwrap_err();
//! assert_eq!(err.to_string(), r#""blogSidebarCount" must be one of [ALL, number]"#);
//! ```

pub mod config;
pub mod logger;

pub use config::{
    Admonitions, AdmonitionsConfig, ConfigDiagnostic, ConfigDiagnostics, ConfigError, FeedKind,
    FeedKinds, FeedOptions, FieldPath, PageLimit, PluginEntry, PluginOptions, ReportingSeverity,
    SortPosts, TagsFile,
};

/// Validate raw plugin options into their normalized form.
///
/// `None` means no options were given and yields the defaults. Pure: reads
/// nothing but its input and writes nothing.
pub fn validate(raw: Option<&serde_json::Value>) -> Result<PluginOptions, ConfigError> {
    PluginOptions::validate(raw)
}
