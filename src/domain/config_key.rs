// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around
//! `String` holding a dot-separated path into the configuration tree. Each
//! dot-separated segment denotes one level of mapping lookup; the empty key
//! denotes the whole tree.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A dot-separated path into a configuration tree.
///
/// `ConfigKey` wraps a `String` to provide type safety when working with
/// configuration keys and to give path segmentation a single home. A key with
/// one segment denotes a direct child of the root; the empty key denotes the
/// whole tree.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// let segments: Vec<&str> = key.segments().collect();
/// assert_eq!(segments, vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key is empty, i.e. denotes the whole tree.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the dot-separated segments of the key.
    ///
    /// Note that splitting never yields zero segments: the empty key yields a
    /// single empty segment, which is why callers check [`is_empty`] before
    /// resolving.
    ///
    /// [`is_empty`]: ConfigKey::is_empty
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("a.b.c");
    /// assert_eq!(key.segments().count(), 3);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("test.key".to_string());
        assert_eq!(key.as_str(), "test.key");
    }

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("test.key");
        assert_eq!(key.as_str(), "test.key");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_segments_single() {
        let key = ConfigKey::from("root");
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["root"]);
    }

    #[test]
    fn test_segments_nested() {
        let key = ConfigKey::from("database.connection.host");
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["database", "connection", "host"]);
    }

    #[test]
    fn test_segments_preserve_empty_interior() {
        // "a..b" contains an empty middle segment; resolution will fail on
        // it with a not-found error rather than silently skipping it.
        let key = ConfigKey::from("a..b");
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["a", "", "b"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigKey::from("").is_empty());
        assert!(!ConfigKey::from("a").is_empty());
    }

    #[test]
    fn test_empty_key_still_yields_one_segment() {
        let key = ConfigKey::from("");
        assert_eq!(key.segments().count(), 1);
    }

    #[test]
    fn test_config_key_equality_and_clone() {
        let key1 = ConfigKey::from("test.key");
        let key2 = key1.clone();
        assert_eq!(key1, key2);
        assert_ne!(key1, ConfigKey::from("other.key"));
    }

    #[test]
    fn test_config_key_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(ConfigKey::from("test.key"), "value1");
        assert_eq!(map.get(&ConfigKey::from("test.key")), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("other.key")), None);
    }
}
