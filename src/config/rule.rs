//! Per-field validation rules.
//!
//! Each rule checks one raw value and converts it into its typed form.
//! Option structs declare a table of [`FieldRule`]s; validation walks the
//! table over a copy of the defaults and overwrites every field the user
//! supplied.
//!
//! Messages follow one pattern, `"<field>" <constraint>`:
//!
//! | Rule                | Constraint on failure                        |
//! |---------------------|----------------------------------------------|
//! | [`string`]          | `must be a string`                           |
//! | [`boolean`]         | `must be a boolean`                          |
//! | [`choice`]          | `must be one of [a, b, c]`                   |
//! | [`integer`]         | `must be a number` / `must be an integer`    |
//! | [`string_list`]     | `must be an array`, `"<field>[i]" ...`       |
//! | [`uri`]             | `must be a valid uri`                        |
//! | [`regex_source`]    | `must be a valid regular expression`         |

use super::types::{ConfigError, FieldPath, RawTable};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

// ============================================================================
// Rule tables
// ============================================================================

/// One entry of an option table: a raw key and how to store it into `T`.
pub struct FieldRule<T> {
    pub key: &'static str,
    pub apply: fn(&mut T, &Value, FieldPath) -> Result<()>,
}

/// Declare a [`FieldRule`] storing `rule(value, path)` into `target.field`.
///
/// ```ignore
/// const RULES: &[FieldRule<FeedOptions>] = &[
///     field_rule!("copyright" => copyright, rule::string),
/// ];
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! field_rule {
    ($key:literal => $field:ident, $rule:expr) => {
        $crate::config::rule::FieldRule {
            key: $key,
            apply: |target, value, path| {
                target.$field = $rule(value, path)?;
                Ok(())
            },
        }
    };
}

/// Apply every rule whose key is present in `table` onto `target`.
///
/// Rules run in table order and stop at the first failure.
pub fn apply_rules<'a, T>(
    target: &mut T,
    table: &mut RawTable<'a>,
    rules: &[FieldRule<T>],
) -> Result<()> {
    for rule in rules {
        if let Some((value, path)) = table.take(rule.key) {
            (rule.apply)(target, value, path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Choice
// ============================================================================

/// A closed set of string values.
pub trait Choice: Sized + Copy + 'static {
    /// Every accepted name, in the order shown in error messages.
    const NAMES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    fn name(self) -> &'static str;
}

/// Render `[a, b, c]` for error messages.
pub fn one_of(names: &[&str]) -> String {
    format!("must be one of [{}]", names.join(", "))
}

// ============================================================================
// Scalar rules
// ============================================================================

pub fn string(value: &Value, path: FieldPath) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConfigError::invalid(path, "must be a string")),
    }
}

pub fn non_empty_string(value: &Value, path: FieldPath) -> Result<String> {
    let s = string(value, path.clone())?;
    if s.is_empty() {
        return Err(ConfigError::invalid(path, "is not allowed to be empty"));
    }
    Ok(s)
}

pub fn optional_string(value: &Value, path: FieldPath) -> Result<Option<String>> {
    string(value, path).map(Some)
}

/// String or `null`.
pub fn nullable_string(value: &Value, path: FieldPath) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ConfigError::invalid(path, "must be a string")),
    }
}

pub fn boolean(value: &Value, path: FieldPath) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConfigError::invalid(path, "must be a boolean"))
}

pub fn choice<T: Choice>(value: &Value, path: FieldPath) -> Result<T> {
    value
        .as_str()
        .and_then(T::from_name)
        .ok_or_else(|| ConfigError::invalid(path, one_of(T::NAMES)))
}

/// Integer no smaller than `min`.
///
/// Whole floats (`5.0`) count as integers; strings are never converted.
pub fn integer(value: &Value, path: FieldPath, min: u64) -> Result<u64> {
    let Value::Number(number) = value else {
        return Err(ConfigError::invalid(path, "must be a number"));
    };

    let int = if let Some(n) = number.as_u64() {
        n as i128
    } else if let Some(n) = number.as_i64() {
        n as i128
    } else {
        let f = number.as_f64().unwrap_or(f64::NAN);
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(ConfigError::invalid(path, "must be an integer"));
        }
        f as i128
    };

    if int < min as i128 {
        return Err(ConfigError::invalid(
            path,
            format!("must be greater than or equal to {min}"),
        ));
    }
    u64::try_from(int).map_err(|_| ConfigError::invalid(path, "must be a safe number"))
}

// ============================================================================
// Composite rules
// ============================================================================

pub fn string_list(value: &Value, path: FieldPath) -> Result<Vec<String>> {
    array(value, &path)?
        .iter()
        .enumerate()
        .map(|(i, item)| string(item, path.index(i)))
        .collect()
}

pub fn array<'v>(value: &'v Value, path: &FieldPath) -> Result<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ConfigError::invalid(path.clone(), "must be an array"))
}

/// Absolute URI, or a reference relative to the site.
pub fn uri(value: &Value, path: FieldPath) -> Result<Option<String>> {
    static BASE: LazyLock<url::Url> =
        LazyLock::new(|| url::Url::parse("https://site.invalid/").expect("static base url"));

    let s = string(value, path.clone())?;
    let valid = match url::Url::parse(&s) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => BASE.join(&s).is_ok(),
        Err(_) => false,
    };
    if s.is_empty() || !valid {
        return Err(ConfigError::invalid(path, "must be a valid uri"));
    }
    Ok(Some(s))
}

/// String holding a regular expression that compiles.
pub fn regex_source(value: &Value, path: FieldPath) -> Result<String> {
    let s = string(value, path.clone())?;
    if let Err(err) = Regex::new(&s) {
        return Err(ConfigError::invalid_with_hint(
            path,
            "must be a valid regular expression",
            err.to_string(),
        ));
    }
    Ok(s)
}
