//! Config field path.

use std::borrow::Cow;
use std::fmt;

/// Path of an option inside the raw plugin options.
///
/// Nested keys are joined with `.` and array items are addressed with
/// `[index]`, mirroring how the path is written in error messages.
///
/// # Example
///
/// ```ignore
/// let feed = FieldPath::new("feedOptions");
/// assert_eq!(feed.child("type").as_str(), "feedOptions.type");
///
/// let include = FieldPath::new("include");
/// assert_eq!(include.index(2).as_str(), "include[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    /// Path of the options value itself, displayed as `value`.
    pub const ROOT: Self = Self::new("");

    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        if self.0.is_empty() { "value" } else { &self.0 }
    }

    /// Path of a key nested under this one.
    ///
    /// Children of [`FieldPath::ROOT`] are top-level keys and carry no prefix.
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(Cow::Owned(key.to_string()))
        } else {
            Self(Cow::Owned(format!("{}.{key}", self.0)))
        }
    }

    /// Path of an array item under this one.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.as_str())))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
