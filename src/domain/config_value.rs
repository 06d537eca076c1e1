// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration tree values with type-safe coercions.
//!
//! This module provides the [`ConfigValue`] tagged union that configuration
//! trees are built from, the key normalizer that canonicalizes foreign-keyed
//! mappings produced by permissive decoders, and the scalar coercion methods
//! used by the store's typed getters.

use crate::domain::errors::{ConfigError, Result};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A string-keyed mapping node of a configuration tree.
///
/// `BTreeMap` iteration is lexicographic, which makes case-insensitive key
/// matching deterministic (first match is the lexicographically smallest key).
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single value in a configuration tree.
///
/// `ConfigValue` is a closed union over everything a JSON or YAML document
/// can decode to. The `RawMapping` variant only exists at the decoding
/// boundary: permissive YAML decoding can produce mappings keyed by
/// non-strings, and those are carried as key/value pairs until
/// [`normalize`](ConfigValue::normalize) rewrites them into string-keyed
/// [`Mapping`](ConfigValue::Mapping) nodes. A normalized tree never contains
/// a `RawMapping`.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_i64("test.key").unwrap(), 42);
///
/// let value = ConfigValue::from(3.7);
/// assert_eq!(value.as_i64("test.key").unwrap(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// An explicit null.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// A string-keyed mapping.
    Mapping(ConfigMap),
    /// A mapping with arbitrarily typed keys, as produced by permissive
    /// decoders. Only valid transiently; normalization removes it.
    RawMapping(Vec<(ConfigValue, ConfigValue)>),
}

impl ConfigValue {
    /// Returns a short name for the runtime variant, used in conversion
    /// errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) | ConfigValue::RawMapping(_) => "mapping",
        }
    }

    /// Returns `true` if the value is a string-keyed mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Returns the string-keyed mapping inside, if this is one.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value and returns the string-keyed mapping inside, if
    /// this is one.
    pub fn into_mapping(self) -> Option<ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Recursively canonicalizes the value into string-keyed form.
    ///
    /// Foreign-keyed mappings become string-keyed mappings: keys that are
    /// already strings pass through, every other key renders to its canonical
    /// textual form. Values (and sequence elements) are normalized
    /// recursively; scalars are returned unchanged. When two keys stringify
    /// to the same text the later entry wins.
    ///
    /// Normalization is total and idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_value::ConfigValue;
    ///
    /// let raw = ConfigValue::RawMapping(vec![(
    ///     ConfigValue::Integer(8080),
    ///     ConfigValue::from("port-name"),
    /// )]);
    /// let normalized = raw.normalize();
    /// assert_eq!(
    ///     normalized.as_mapping().unwrap()["8080"],
    ///     ConfigValue::from("port-name"),
    /// );
    /// ```
    pub fn normalize(self) -> ConfigValue {
        match self {
            ConfigValue::RawMapping(entries) => {
                let mut map = ConfigMap::new();
                for (key, value) in entries {
                    map.insert(key.render_key(), value.normalize());
                }
                ConfigValue::Mapping(map)
            }
            ConfigValue::Mapping(map) => ConfigValue::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, value.normalize()))
                    .collect(),
            ),
            ConfigValue::Sequence(seq) => {
                ConfigValue::Sequence(seq.into_iter().map(ConfigValue::normalize).collect())
            }
            scalar => scalar,
        }
    }

    /// Renders the value as a mapping key: strings pass through verbatim,
    /// everything else uses the canonical display form.
    pub(crate) fn render_key(&self) -> String {
        match self {
            ConfigValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Coerces the value to a `String`.
    ///
    /// This conversion is total: strings pass through, scalars render to
    /// their canonical textual form, and containers render to a compact
    /// JSON-like form.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Coerces the value to a boolean.
    ///
    /// Strings are matched case-insensitively: `true`/`1`/`yes`/`y`/`on` are
    /// true and `false`/`0`/`no`/`n`/`off` are false. Numbers are true when
    /// nonzero. Anything else fails with a conversion error carrying `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("YES").as_bool("test.key").unwrap());
    /// assert!(ConfigValue::from("maybe").as_bool("test.key").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::Integer(i) => Ok(*i != 0),
            ConfigValue::Float(f) => Ok(*f != 0.0),
            ConfigValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "1" | "yes" | "y" | "on" => Ok(true),
                "false" | "0" | "no" | "n" | "off" => Ok(false),
                _ => Err(self.conversion_error(key, "boolean")),
            },
            _ => Err(self.conversion_error(key, "boolean")),
        }
    }

    /// Coerces the value to an `i64`.
    ///
    /// Floats truncate toward zero; strings parse as base-10 integers and
    /// fail on non-numeric text (including decimal text like `"3.7"`).
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::Float(f) => Ok(*f as i64),
            ConfigValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| self.conversion_error(key, "integer")),
            _ => Err(self.conversion_error(key, "integer")),
        }
    }

    /// Coerces the value to an `f64`.
    ///
    /// Integers widen; strings parse as decimal numbers and fail on
    /// non-numeric text.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Integer(i) => Ok(*i as f64),
            ConfigValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.conversion_error(key, "float")),
            _ => Err(self.conversion_error(key, "float")),
        }
    }

    /// Coerces the value to a vector of strings.
    ///
    /// A sequence converts element-wise via string coercion; a single string
    /// wraps into a one-element vector; anything else fails.
    pub fn as_string_vec(&self, key: &str) -> Result<Vec<String>> {
        match self {
            ConfigValue::Sequence(seq) => Ok(seq.iter().map(ConfigValue::as_string).collect()),
            ConfigValue::String(s) => Ok(vec![s.clone()]),
            _ => Err(self.conversion_error(key, "sequence of strings")),
        }
    }

    fn conversion_error(&self, key: &str, target_type: &'static str) -> ConfigError {
        ConfigError::TypeConversion {
            key: key.to_string(),
            target_type,
            found: self.type_name(),
        }
    }
}

/// Writes a value in nested position: strings are quoted, everything else
/// uses the top-level rendering.
fn fmt_nested(value: &ConfigValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        ConfigValue::String(s) => write!(f, "{s:?}"),
        other => write!(f, "{other}"),
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Integer(i) => write!(f, "{i}"),
            ConfigValue::Float(v) => write!(f, "{v}"),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Sequence(seq) => {
                f.write_str("[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_nested(item, f)?;
                }
                f.write_str("]")
            }
            ConfigValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    fmt_nested(value, f)?;
                }
                f.write_str("}")
            }
            ConfigValue::RawMapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_nested(key, f)?;
                    f.write_str(": ")?;
                    fmt_nested(value, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Null => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Float(f) => serializer.serialize_f64(*f),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Sequence(seq) => serializer.collect_seq(seq),
            ConfigValue::Mapping(map) => serializer.collect_map(map),
            ConfigValue::RawMapping(entries) => {
                serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(seq: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(seq)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(seq: Vec<String>) -> Self {
        ConfigValue::Sequence(seq.into_iter().map(ConfigValue::String).collect())
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Mapping(map)
    }
}
