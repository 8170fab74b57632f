//! Raw option table with unknown-key detection.

use super::{ConfigError, FieldPath};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

/// A raw options object being validated.
///
/// Every key read through [`RawTable::take`] is marked as known; whatever is
/// left when [`RawTable::finish`] runs is reported as not allowed.
#[derive(Debug)]
pub struct RawTable<'a> {
    map: Option<&'a Map<String, Value>>,
    path: FieldPath,
    seen: FxHashSet<&'a str>,
}

impl<'a> RawTable<'a> {
    /// Wrap `value` found at `path`.
    ///
    /// `None` (an absent value) is an empty table; anything other than an
    /// object fails.
    pub fn new(value: Option<&'a Value>, path: FieldPath) -> Result<Self, ConfigError> {
        let map = match value {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => return Err(ConfigError::invalid(path, "must be of type object")),
        };
        Ok(Self {
            map,
            path,
            seen: FxHashSet::default(),
        })
    }

    /// Path of the table itself.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Look up `key`, marking it as known.
    ///
    /// Returns the value and its full path, or `None` when the key is absent.
    pub fn take(&mut self, key: &'a str) -> Option<(&'a Value, FieldPath)> {
        self.seen.insert(key);
        let value = self.map?.get(key)?;
        Some((value, self.path.child(key)))
    }

    /// Whether `key` is present, without marking it.
    pub fn contains(&self, key: &str) -> bool {
        self.map.is_some_and(|map| map.contains_key(key))
    }

    /// Fail on the first key never taken, in input order.
    pub fn finish(self) -> Result<(), ConfigError> {
        let Some(map) = self.map else {
            return Ok(());
        };
        match map.keys().find(|key| !self.seen.contains(key.as_str())) {
            Some(key) => Err(ConfigError::invalid(self.path.child(key), "is not allowed")),
            None => Ok(()),
        }
    }
}
