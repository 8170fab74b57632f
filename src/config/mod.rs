//! Blog plugin options: validation and normalization.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Option groups with their own shapes
//! │   ├── feed       # feedOptions
//! │   ├── listing    # postsPerPage, blogSidebarCount, sortPosts
//! │   ├── markdown   # *Plugins lists, admonitions
//! │   └── tags       # tags, onInlineTags, ...
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostic(s)
//! │   ├── field      # FieldPath
//! │   └── table      # RawTable
//! ├── rule.rs        # Per-field rules
//! └── mod.rs         # PluginOptions (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! path = "news"
//! routeBasePath = "/news"
//! postsPerPage = "ALL"
//! blogSidebarCount = 0
//! tags = "tags.yml"
//! onInlineTags = "throw"
//!
//! [feedOptions]
//! type = "all"
//! ```
//!
//! Every option left out keeps its default; see [`PluginOptions::default`].

pub mod rule;
pub mod section;
pub mod types;
mod util;

pub use section::{
    Admonitions, AdmonitionsConfig, DEFAULT_FEED_LIMIT, FeedKind, FeedKinds, FeedOptions,
    PageLimit, PluginEntry, ReportingSeverity, SortPosts, TagsFile,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, RawTable};
pub use util::Format;

use crate::{debug, field_rule};
use anyhow::{Context, Result};
use regex::Regex;
use rule::{Choice, FieldRule};
use section::{listing, markdown, tags};
use serde::Serialize;
use serde_json::Value;
use std::{fs, path::Path};

// ============================================================================
// root options
// ============================================================================

/// Fully normalized blog plugin options.
///
/// Built once per validation call and read-only afterwards. Serializes back
/// to the raw camelCase form; validating that form again yields an equal
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Plugin instance id, for sites running several blogs.
    pub id: String,

    /// Content directory, relative to the site directory.
    pub path: String,

    /// URL route of the blog section.
    pub route_base_path: String,

    /// URL route of tag pages, under `route_base_path`.
    pub tags_base_path: String,

    /// URL route of the archive page, `None` to skip it.
    pub archive_base_path: Option<String>,

    /// URL route of paginated list pages.
    pub page_base_path: String,

    /// URL route of author pages.
    pub authors_base_path: String,

    /// Authors map file, relative to the content directory.
    pub authors_map_path: String,

    /// Globs of post files to pick up.
    pub include: Vec<String>,

    /// Globs of files to skip.
    pub exclude: Vec<String>,

    pub posts_per_page: PageLimit,

    pub blog_title: String,
    pub blog_description: String,

    /// Posts shown in the sidebar; zero hides it.
    pub blog_sidebar_count: PageLimit,
    pub blog_sidebar_title: String,

    pub blog_list_component: String,
    pub blog_post_component: String,
    pub blog_tags_list_component: String,
    pub blog_tags_posts_component: String,
    pub blog_archive_component: String,
    pub blog_authors_list_component: String,
    pub blog_authors_posts_component: String,

    pub show_reading_time: bool,

    /// Base URL for "edit this page" links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    pub edit_localized_files: bool,

    /// Regular expression separating a post's summary from the rest.
    pub truncate_marker: String,

    pub sort_posts: SortPosts,
    pub show_last_update_time: bool,
    pub show_last_update_author: bool,

    pub feed_options: FeedOptions,

    #[serde(skip_serializing_if = "TagsFile::is_unset")]
    pub tags: TagsFile,
    pub on_inline_tags: ReportingSeverity,
    pub on_inline_authors: ReportingSeverity,
    pub on_untruncated_blog_posts: ReportingSeverity,

    pub admonitions: Admonitions,
    pub remark_plugins: Vec<PluginEntry>,
    pub rehype_plugins: Vec<PluginEntry>,
    pub recma_plugins: Vec<PluginEntry>,
    pub before_default_remark_plugins: Vec<PluginEntry>,
    pub before_default_rehype_plugins: Vec<PluginEntry>,
}

/// Default `truncateMarker`: `<!-- truncate -->` or `{/* truncate */}`.
pub const DEFAULT_TRUNCATE_MARKER: &str = r"<!--\s*truncate\s*-->|\{/\*\s*truncate\s*\*/\}";

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            id: "default".into(),
            path: "blog".into(),
            route_base_path: "/blog".into(),
            tags_base_path: "tags".into(),
            archive_base_path: Some("archive".into()),
            page_base_path: "page".into(),
            authors_base_path: "authors".into(),
            authors_map_path: "authors.yml".into(),
            include: vec!["**/*.{md,mdx}".into()],
            exclude: vec![
                "**/_*.{js,jsx,ts,tsx,md,mdx}".into(),
                "**/_*/**".into(),
                "**/*.test.{js,jsx,ts,tsx}".into(),
                "**/__tests__/**".into(),
            ],
            posts_per_page: PageLimit::Count(10),
            blog_title: "Blog".into(),
            blog_description: "Blog".into(),
            blog_sidebar_count: PageLimit::Count(5),
            blog_sidebar_title: "Recent posts".into(),
            blog_list_component: "@theme/BlogListPage".into(),
            blog_post_component: "@theme/BlogPostPage".into(),
            blog_tags_list_component: "@theme/BlogTagsListPage".into(),
            blog_tags_posts_component: "@theme/BlogTagsPostsPage".into(),
            blog_archive_component: "@theme/BlogArchivePage".into(),
            blog_authors_list_component: "@theme/Blog/Pages/BlogAuthorsListPage".into(),
            blog_authors_posts_component: "@theme/Blog/Pages/BlogAuthorsPostsPage".into(),
            show_reading_time: true,
            edit_url: None,
            edit_localized_files: false,
            truncate_marker: DEFAULT_TRUNCATE_MARKER.into(),
            sort_posts: SortPosts::Descending,
            show_last_update_time: false,
            show_last_update_author: false,
            feed_options: FeedOptions::default(),
            tags: TagsFile::Unset,
            on_inline_tags: ReportingSeverity::Warn,
            on_inline_authors: ReportingSeverity::Warn,
            on_untruncated_blog_posts: ReportingSeverity::Warn,
            admonitions: Admonitions::default(),
            remark_plugins: Vec::new(),
            rehype_plugins: Vec::new(),
            recma_plugins: Vec::new(),
            before_default_remark_plugins: Vec::new(),
            before_default_rehype_plugins: Vec::new(),
        }
    }
}

impl PluginOptions {
    /// Top-level option rules, applied in order.
    ///
    /// `feedOptions` is handled apart since it also reports warnings.
    const RULES: &'static [FieldRule<Self>] = &[
        field_rule!("id" => id, plugin_id),
        field_rule!("path" => path, rule::string),
        field_rule!("routeBasePath" => route_base_path, rule::string),
        field_rule!("tagsBasePath" => tags_base_path, rule::string),
        field_rule!("archiveBasePath" => archive_base_path, rule::nullable_string),
        field_rule!("pageBasePath" => page_base_path, rule::string),
        field_rule!("authorsBasePath" => authors_base_path, rule::string),
        field_rule!("authorsMapPath" => authors_map_path, rule::string),
        field_rule!("include" => include, rule::string_list),
        field_rule!("exclude" => exclude, rule::string_list),
        field_rule!("postsPerPage" => posts_per_page, listing::posts_per_page),
        field_rule!("blogTitle" => blog_title, rule::string),
        field_rule!("blogDescription" => blog_description, rule::string),
        field_rule!("blogSidebarCount" => blog_sidebar_count, listing::sidebar_count),
        field_rule!("blogSidebarTitle" => blog_sidebar_title, rule::string),
        field_rule!("blogListComponent" => blog_list_component, rule::string),
        field_rule!("blogPostComponent" => blog_post_component, rule::string),
        field_rule!("blogTagsListComponent" => blog_tags_list_component, rule::string),
        field_rule!("blogTagsPostsComponent" => blog_tags_posts_component, rule::string),
        field_rule!("blogArchiveComponent" => blog_archive_component, rule::string),
        field_rule!("blogAuthorsListComponent" => blog_authors_list_component, rule::string),
        field_rule!("blogAuthorsPostsComponent" => blog_authors_posts_component, rule::string),
        field_rule!("showReadingTime" => show_reading_time, rule::boolean),
        field_rule!("editUrl" => edit_url, rule::uri),
        field_rule!("editLocalizedFiles" => edit_localized_files, rule::boolean),
        field_rule!("truncateMarker" => truncate_marker, rule::regex_source),
        field_rule!("sortPosts" => sort_posts, rule::choice),
        field_rule!("showLastUpdateTime" => show_last_update_time, rule::boolean),
        field_rule!("showLastUpdateAuthor" => show_last_update_author, rule::boolean),
        field_rule!("tags" => tags, TagsFile::parse),
        field_rule!("onInlineTags" => on_inline_tags, tags::severity),
        field_rule!("onInlineAuthors" => on_inline_authors, tags::severity),
        field_rule!("onUntruncatedBlogPosts" => on_untruncated_blog_posts, tags::severity),
        field_rule!("admonitions" => admonitions, Admonitions::parse),
        field_rule!("remarkPlugins" => remark_plugins, markdown::plugin_list),
        field_rule!("rehypePlugins" => rehype_plugins, markdown::plugin_list),
        field_rule!("recmaPlugins" => recma_plugins, markdown::plugin_list),
        field_rule!("beforeDefaultRemarkPlugins" => before_default_remark_plugins, markdown::plugin_list),
        field_rule!("beforeDefaultRehypePlugins" => before_default_rehype_plugins, markdown::plugin_list),
    ];

    /// Validate raw options, discarding warnings.
    ///
    /// `None` stands for options that were never given.
    pub fn validate(raw: Option<&Value>) -> Result<Self, ConfigError> {
        Self::validate_with_diagnostics(raw, &mut ConfigDiagnostics::new())
    }

    /// Validate raw options, collecting warnings into `diag`.
    ///
    /// Stops at the first invalid option; nothing is returned on failure.
    pub fn validate_with_diagnostics(
        raw: Option<&Value>,
        diag: &mut ConfigDiagnostics,
    ) -> Result<Self, ConfigError> {
        let mut table = RawTable::new(raw, FieldPath::ROOT)?;
        let mut options = Self::default();

        rule::apply_rules(&mut options, &mut table, Self::RULES)?;
        if let Some((value, path)) = table.take("feedOptions") {
            options.feed_options = FeedOptions::parse(value, path, diag)?;
        }

        if options.tags.is_disabled() && table.contains("onInlineTags") {
            diag.warn(
                FieldPath::new("onInlineTags"),
                "has no effect because the tags file is disabled",
            );
        }

        table.finish()?;
        Ok(options)
    }

    /// Parse and validate TOML options.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::validate(Some(&Format::Toml.parse(content)?))
    }

    /// Parse and validate JSON options.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::validate(Some(&Format::Json.parse(content)?))
    }

    /// Load options from a `.toml` or `.json` file.
    ///
    /// Warnings are printed once the options pass validation.
    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let raw = format.parse(&content)?;

        let mut diag = ConfigDiagnostics::new();
        let options = Self::validate_with_diagnostics(Some(&raw), &mut diag)
            .with_context(|| format!("invalid blog options in `{}`", path.display()))?;
        diag.print_warnings();

        debug!(
            "config";
            "loaded blog `{}` from {} (route {}, feeds: {})",
            options.id,
            path.display(),
            options.route_base_path,
            options.feed_options.kinds().map(FeedKind::name).collect::<Vec<_>>().join(", ")
        );
        Ok(options)
    }

    /// Compiled `truncate_marker`.
    pub fn truncate_regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.truncate_marker)
    }

    pub const fn archive_enabled(&self) -> bool {
        self.archive_base_path.is_some()
    }
}

/// Plugin ids: ASCII alphanumerics, `_` and `-`.
fn plugin_id(value: &Value, path: FieldPath) -> Result<String, ConfigError> {
    let id = rule::string(value, path.clone())?;
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
    if !valid {
        return Err(ConfigError::invalid(
            path,
            "must only contain alphanumerics, underscores, and dashes",
        ));
    }
    Ok(id)
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Validate raw options, panicking on failure.
#[cfg(test)]
pub fn test_validate(raw: Value) -> PluginOptions {
    match PluginOptions::validate(Some(&raw)) {
        Ok(options) => options,
        Err(err) => panic!("test options failed validation: {err}"),
    }
}

/// Validate raw options, returning the failure message.
#[cfg(test)]
pub fn test_validate_err(raw: Value) -> String {
    match PluginOptions::validate(Some(&raw)) {
        Ok(options) => panic!("test options unexpectedly passed: {options:?}"),
        Err(err) => err.to_string(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ------------------------------------------------------------------------
    // defaults and merging
    // ------------------------------------------------------------------------

    #[test]
    fn test_undefined_yields_defaults() {
        let options = PluginOptions::validate(None).unwrap();
        assert_eq!(options, PluginOptions::default());
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        assert_eq!(test_validate(json!({})), PluginOptions::default());
    }

    #[test]
    fn test_default_values() {
        let options = PluginOptions::default();
        assert_eq!(options.path, "blog");
        assert_eq!(options.route_base_path, "/blog");
        assert_eq!(options.posts_per_page, PageLimit::Count(10));
        assert_eq!(options.blog_sidebar_count, PageLimit::Count(5));
        assert_eq!(options.on_inline_tags, ReportingSeverity::Warn);
        assert_eq!(options.tags, TagsFile::Unset);
        assert!(options.feed_options.is_enabled());
        assert!(options.archive_enabled());
    }

    #[test]
    fn test_user_values_override_defaults_field_by_field() {
        let options = test_validate(json!({
            "path": "news",
            "routeBasePath": "/",
            "include": ["**/*.md"],
            "postsPerPage": 2,
            "blogTitle": "News",
            "showReadingTime": false,
            "editUrl": "https://github.com/org/site/edit/main/website/news/",
            "remarkPlugins": [["remark-math", { "singleDollar": false }]],
            "admonitions": false
        }));

        let expected = PluginOptions {
            path: "news".into(),
            route_base_path: "/".into(),
            include: vec!["**/*.md".into()],
            posts_per_page: PageLimit::Count(2),
            blog_title: "News".into(),
            show_reading_time: false,
            edit_url: Some("https://github.com/org/site/edit/main/website/news/".into()),
            remark_plugins: vec![PluginEntry::WithOptions(
                "remark-math".into(),
                json!({ "singleDollar": false }).as_object().unwrap().clone(),
            )],
            admonitions: Admonitions::Enabled(false),
            ..PluginOptions::default()
        };
        assert_eq!(options, expected);
    }

    #[test]
    fn test_empty_route_base_path_allowed() {
        assert_eq!(test_validate(json!({ "routeBasePath": "" })).route_base_path, "");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = PluginOptions::validate(Some(&json!("blog"))).unwrap_err();
        assert_eq!(err.to_string(), "\"value\" must be of type object");
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert_eq!(
            test_validate_err(json!({ "path": "blog", "readingTime": 3 })),
            "\"readingTime\" is not allowed"
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // postsPerPage comes before blogSidebarTitle in the rule table
        assert_eq!(
            test_validate_err(json!({ "blogSidebarTitle": 42, "postsPerPage": -1 })),
            "\"postsPerPage\" must be greater than or equal to 1"
        );
    }

    // ------------------------------------------------------------------------
    // feedOptions
    // ------------------------------------------------------------------------

    fn feed_kinds(options: &PluginOptions) -> Option<Vec<FeedKind>> {
        options
            .feed_options
            .kinds
            .as_ref()
            .map(|kinds| kinds.iter().collect())
    }

    #[test]
    fn test_feed_type_all() {
        let options = test_validate(json!({ "feedOptions": { "type": "all" } }));
        assert_eq!(
            feed_kinds(&options),
            Some(vec![FeedKind::Rss, FeedKind::Atom, FeedKind::Json])
        );
        assert_eq!(options.feed_options.copyright, "");
        assert_eq!(options.feed_options.limit, Some(DEFAULT_FEED_LIMIT));
    }

    #[test]
    fn test_feed_type_omitted() {
        let options = test_validate(json!({ "feedOptions": { "title": "Feed" } }));
        assert_eq!(feed_kinds(&options), Some(vec![FeedKind::Rss, FeedKind::Atom]));
        assert_eq!(options.feed_options.title.as_deref(), Some("Feed"));
    }

    #[test]
    fn test_feed_type_null_disables_feeds() {
        let options = test_validate(json!({ "feedOptions": { "type": null } }));
        assert_eq!(feed_kinds(&options), None);
        assert_eq!(
            options.feed_options,
            FeedOptions {
                kinds: None,
                ..FeedOptions::default()
            }
        );
    }

    #[test]
    fn test_feed_type_invalid() {
        assert_eq!(
            test_validate_err(json!({ "feedOptions": { "type": "none" } })),
            "\"feedOptions.type\" does not match any of the allowed types"
        );
    }

    #[test]
    fn test_feed_disabled_warnings() {
        let raw = json!({ "feedOptions": { "type": null, "limit": 3 } });
        let mut diag = ConfigDiagnostics::new();
        PluginOptions::validate_with_diagnostics(Some(&raw), &mut diag).unwrap();
        assert_eq!(diag.warnings()[0].field.as_str(), "feedOptions.limit");
    }

    // ------------------------------------------------------------------------
    // listing
    // ------------------------------------------------------------------------

    #[test]
    fn test_posts_per_page() {
        assert_eq!(
            test_validate_err(json!({ "postsPerPage": -1 })),
            "\"postsPerPage\" must be greater than or equal to 1"
        );
        assert_eq!(
            test_validate(json!({ "postsPerPage": "ALL" })).posts_per_page,
            PageLimit::All
        );
        assert_eq!(
            test_validate_err(json!({ "postsPerPage": "10" })),
            "\"postsPerPage\" must be one of [ALL, number]"
        );
    }

    #[test]
    fn test_blog_sidebar_count() {
        assert_eq!(
            test_validate(json!({ "blogSidebarCount": 0 })).blog_sidebar_count,
            PageLimit::Count(0)
        );
        assert_eq!(
            test_validate(json!({ "blogSidebarCount": "ALL" })).blog_sidebar_count,
            PageLimit::All
        );
        assert_eq!(
            test_validate_err(json!({ "blogSidebarCount": "abcdef" })),
            "\"blogSidebarCount\" must be one of [ALL, number]"
        );
    }

    #[test]
    fn test_blog_sidebar_title() {
        assert_eq!(
            test_validate(json!({ "blogSidebarTitle": "all posts" })).blog_sidebar_title,
            "all posts"
        );
        assert_eq!(
            test_validate_err(json!({ "blogSidebarTitle": 42 })),
            "\"blogSidebarTitle\" must be a string"
        );
    }

    #[test]
    fn test_sort_posts() {
        assert_eq!(
            test_validate(json!({ "sortPosts": "ascending" })).sort_posts,
            SortPosts::Ascending
        );
    }

    // ------------------------------------------------------------------------
    // tags
    // ------------------------------------------------------------------------

    #[test]
    fn test_tags_undefined_stays_unset() {
        let options = test_validate(json!({}));
        assert_eq!(options.tags, TagsFile::Unset);
        let value = serde_json::to_value(&options).unwrap();
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_tags_null_and_false_preserved() {
        let options = test_validate(json!({ "tags": null }));
        assert_eq!(options.tags, TagsFile::Null);
        assert_eq!(serde_json::to_value(&options).unwrap()["tags"], Value::Null);

        let options = test_validate(json!({ "tags": false }));
        assert_eq!(options.tags, TagsFile::Disabled);
        assert_eq!(serde_json::to_value(&options).unwrap()["tags"], json!(false));
    }

    #[test]
    fn test_tags_path() {
        let options = test_validate(json!({ "tags": "customTags.yml" }));
        assert_eq!(options.tags.path(), Some("customTags.yml"));
        assert_eq!(
            test_validate_err(json!({ "tags": 42 })),
            "\"tags\" must be a string"
        );
    }

    #[test]
    fn test_on_inline_tags() {
        assert_eq!(
            test_validate(json!({ "onInlineTags": "throw" })).on_inline_tags,
            ReportingSeverity::Throw
        );
        for bad in [json!("trace"), json!(42)] {
            assert_eq!(
                test_validate_err(json!({ "onInlineTags": bad })),
                "\"onInlineTags\" must be one of [ignore, log, warn, throw]"
            );
        }
    }

    #[test]
    fn test_inline_tags_policy_with_disabled_tags_warns() {
        let raw = json!({ "tags": false, "onInlineTags": "throw" });
        let mut diag = ConfigDiagnostics::new();
        PluginOptions::validate_with_diagnostics(Some(&raw), &mut diag).unwrap();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "onInlineTags");
    }

    // ------------------------------------------------------------------------
    // other fields
    // ------------------------------------------------------------------------

    #[test]
    fn test_plugin_id() {
        assert_eq!(test_validate(json!({ "id": "second-blog_2" })).id, "second-blog_2");
        assert_eq!(
            test_validate_err(json!({ "id": "my blog" })),
            "\"id\" must only contain alphanumerics, underscores, and dashes"
        );
    }

    #[test]
    fn test_archive_base_path_null_disables_archive() {
        let options = test_validate(json!({ "archiveBasePath": null }));
        assert!(!options.archive_enabled());
    }

    #[test]
    fn test_truncate_marker() {
        let options = PluginOptions::default();
        let regex = options.truncate_regex().unwrap();
        assert!(regex.is_match("intro\n<!-- truncate -->\nrest"));
        assert!(regex.is_match("intro\n{/* truncate */}\nrest"));

        let options = test_validate(json!({ "truncateMarker": "<!--more-->" }));
        assert!(options.truncate_regex().unwrap().is_match("a <!--more--> b"));

        assert_eq!(
            test_validate_err(json!({ "truncateMarker": "[" })),
            "\"truncateMarker\" must be a valid regular expression"
        );
    }

    #[test]
    fn test_plugin_lists_validated_for_shape() {
        assert_eq!(
            test_validate_err(json!({ "rehypePlugins": [42] })),
            "\"rehypePlugins[0]\" does not match any of the allowed types"
        );
        assert_eq!(
            test_validate_err(json!({ "beforeDefaultRemarkPlugins": {} })),
            "\"beforeDefaultRemarkPlugins\" must be an array"
        );
    }

    #[test]
    fn test_include_items_must_be_strings() {
        assert_eq!(
            test_validate_err(json!({ "include": ["**/*.md", 1] })),
            "\"include[1]\" must be a string"
        );
    }

    // ------------------------------------------------------------------------
    // round trip and loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_normalized_options_validate_unchanged() {
        let options = test_validate(json!({
            "id": "news",
            "postsPerPage": "ALL",
            "blogSidebarCount": 0,
            "archiveBasePath": null,
            "editUrl": "/edit/",
            "tags": false,
            "onInlineTags": "ignore",
            "admonitions": { "keywords": ["note"] },
            "recmaPlugins": ["recma-a", { "x": 1 }, ["recma-b", {}]],
            "feedOptions": { "type": "all", "title": "t", "limit": null }
        }));
        let serialized = serde_json::to_value(&options).unwrap();
        assert_eq!(test_validate(serialized), options);

        let defaults = serde_json::to_value(PluginOptions::default()).unwrap();
        assert_eq!(test_validate(defaults), PluginOptions::default());
    }

    #[test]
    fn test_feed_null_round_trip() {
        let options = test_validate(json!({ "feedOptions": { "type": null } }));
        let serialized = serde_json::to_value(&options).unwrap();
        assert_eq!(serialized["feedOptions"]["type"], Value::Null);
        assert_eq!(test_validate(serialized), options);
    }

    #[test]
    fn test_from_toml_str() {
        let options = PluginOptions::from_toml_str(
            r#"
path = "news"
blogSidebarCount = "ALL"
tags = false

[feedOptions]
type = ["atom"]
"#,
        )
        .unwrap();
        assert_eq!(options.path, "news");
        assert_eq!(options.blog_sidebar_count, PageLimit::All);
        assert_eq!(options.tags, TagsFile::Disabled);
        assert_eq!(feed_kinds(&options), Some(vec![FeedKind::Atom]));

        let err = PluginOptions::from_toml_str("postsPerPage = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_str() {
        let options = PluginOptions::from_json_str(r#"{ "tags": null }"#).unwrap();
        assert_eq!(options.tags, TagsFile::Null);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, "routeBasePath = \"/posts\"\n[feedOptions]\ntype = \"rss\"\n").unwrap();

        let options = PluginOptions::load(&path).unwrap();
        assert_eq!(options.route_base_path, "/posts");
        assert_eq!(feed_kinds(&options), Some(vec![FeedKind::Rss]));
    }

    #[test]
    fn test_load_invalid_file_keeps_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.json");
        fs::write(&path, r#"{ "onInlineTags": 1 }"#).unwrap();

        let err = PluginOptions::load(&path).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(
            config_err.to_string(),
            "\"onInlineTags\" must be one of [ignore, log, warn, throw]"
        );
        assert!(format!("{err:#}").contains("blog.json"));
    }

    #[test]
    fn test_load_missing_and_unsupported() {
        let dir = tempfile::tempdir().unwrap();

        let err = PluginOptions::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));

        let err = PluginOptions::load(&dir.path().join("blog.yaml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnsupportedFormat(_))
        ));
    }
}
