//! Option groups with their own shapes.
//!
//! | Module     | Options                                              |
//! |------------|------------------------------------------------------|
//! | `feed`     | `feedOptions`                                        |
//! | `listing`  | `postsPerPage`, `blogSidebarCount`, `sortPosts`      |
//! | `markdown` | `*Plugins` lists, `admonitions`                      |
//! | `tags`     | `tags`, `onInline*`, `onUntruncatedBlogPosts`        |

pub mod feed;
pub mod listing;
pub mod markdown;
pub mod tags;

pub use feed::{DEFAULT_FEED_LIMIT, FeedKind, FeedKinds, FeedOptions};
pub use listing::{PageLimit, SortPosts};
pub use markdown::{Admonitions, AdmonitionsConfig, PluginEntry};
pub use tags::{ReportingSeverity, TagsFile};
