// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration store.
//!
//! [`ConfigStore`] owns one configuration tree and provides dot-path typed
//! access, mutation, shallow merging, and JSON/YAML loading and saving. It is
//! a single-threaded owner; wrap it in a
//! [`SharedConfigStore`](crate::service::SharedConfigStore) for concurrent
//! access.

use crate::adapters::{codec_for, fs_path};
use crate::domain::{path, ConfigError, ConfigKey, ConfigMap, ConfigValue, Format, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An in-memory configuration tree with dot-path access and persistence.
///
/// Keys are dot-separated paths (`"server.port"`). The empty key denotes the
/// whole tree. Key matching is case-sensitive by default; a case-insensitive
/// store matches each segment against the first key (in lexicographic order)
/// that case-insensitively equals it. Writes always use segments verbatim.
///
/// # Examples
///
/// ```
/// use nestcfg::prelude::*;
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let mut store = ConfigStore::new();
/// store.load_str(r#"{"server": {"port": 8080}}"#, Format::Json)?;
///
/// assert_eq!(store.get_int("server.port")?, 8080);
///
/// store.set("server.host", "localhost")?;
/// assert_eq!(store.get_string("server.host")?, "localhost");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    /// The configuration tree, string-keyed after every load
    tree: ConfigMap,
    /// Path of the last loaded file, used as the default save target
    file_path: Option<PathBuf>,
    /// Format of the last load, used as the default save format
    format: Option<Format>,
    /// Whether key matching is case-sensitive (default true)
    case_sensitive: bool,
}

impl ConfigStore {
    /// Creates a new empty, case-sensitive store.
    pub fn new() -> Self {
        Self {
            tree: ConfigMap::new(),
            file_path: None,
            format: None,
            case_sensitive: true,
        }
    }

    /// Creates a new store builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::builder().case_sensitive(false).build();
    /// assert!(!store.is_case_sensitive());
    /// ```
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Returns whether key matching is case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the file path associated with this store, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the format associated with this store, if any.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// Returns `true` if the tree has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Loads a document from text, replacing the current tree.
    ///
    /// The document must decode to a mapping at the top level; any other
    /// shape is a parse failure. Decoded output is normalized
    /// unconditionally, so no foreign-keyed mapping enters the store. Loading
    /// is all-or-nothing: on any failure the current tree is left untouched.
    pub fn load_str(&mut self, content: &str, format: Format) -> Result<()> {
        let codec = codec_for(format)?;
        let decoded = codec.decode(content)?.normalize();
        let tree = decoded.into_mapping().ok_or_else(|| ConfigError::Parse {
            format,
            source: "top-level document is not a mapping".into(),
        })?;

        self.tree = tree;
        self.format = Some(format);
        tracing::debug!(%format, keys = self.tree.len(), "configuration loaded");
        Ok(())
    }

    /// Loads a configuration file, replacing the current tree.
    ///
    /// The path may contain `$VAR`/`${VAR}` references; the format is sniffed
    /// from the file extension (`json`, `yaml`, `yml`). On success the
    /// resolved path becomes the default save target.
    pub fn load_file(&mut self, path: &str) -> Result<()> {
        let resolved = fs_path::expand_path(path)?;
        let format = fs_path::detect_format(&resolved)?;
        let content = fs::read_to_string(&resolved)?;
        self.load_str(&content, format)?;
        self.file_path = Some(resolved);
        Ok(())
    }

    /// Retrieves the raw value at a key.
    ///
    /// The empty key returns the entire tree as a mapping value. Returned
    /// values are owned clones; mutating them does not affect the store.
    pub fn get(&self, key: impl Into<ConfigKey>) -> Result<ConfigValue> {
        let key = key.into();
        if key.is_empty() {
            return Ok(ConfigValue::Mapping(self.tree.clone()));
        }
        path::resolve_value(&self.tree, &key, self.case_sensitive, "get").cloned()
    }

    /// Retrieves a value coerced to a `String`.
    ///
    /// String coercion is total for any value that resolves: scalars render
    /// to their canonical textual form and containers to a compact JSON-like
    /// form.
    pub fn get_string(&self, key: impl Into<ConfigKey>) -> Result<String> {
        let key = key.into();
        Ok(self.get(key)?.as_string())
    }

    /// Retrieves a value coerced to a boolean.
    ///
    /// Recognizes `true`/`1`/`yes`/`y`/`on` and `false`/`0`/`no`/`n`/`off`
    /// (case-insensitive) in strings; numbers are true when nonzero.
    pub fn get_bool(&self, key: impl Into<ConfigKey>) -> Result<bool> {
        let key = key.into();
        self.get(key.clone())?.as_bool(key.as_str())
    }

    /// Retrieves a value coerced to an `i64`.
    ///
    /// Floats truncate toward zero; strings must parse as base-10 integers.
    pub fn get_int(&self, key: impl Into<ConfigKey>) -> Result<i64> {
        let key = key.into();
        self.get(key.clone())?.as_i64(key.as_str())
    }

    /// Retrieves a value coerced to an `f64`.
    pub fn get_float(&self, key: impl Into<ConfigKey>) -> Result<f64> {
        let key = key.into();
        self.get(key.clone())?.as_f64(key.as_str())
    }

    /// Retrieves a value coerced to a vector of strings.
    ///
    /// Sequences convert element-wise; a single string becomes a one-element
    /// vector.
    pub fn get_string_vec(&self, key: impl Into<ConfigKey>) -> Result<Vec<String>> {
        let key = key.into();
        self.get(key.clone())?.as_string_vec(key.as_str())
    }

    /// Returns `true` if a value exists at the key.
    pub fn has(&self, key: impl Into<ConfigKey>) -> bool {
        self.get(key).is_ok()
    }

    /// Writes a value at a key, creating missing intermediate mappings.
    ///
    /// Segments are matched verbatim (writes are case-sensitive even on a
    /// case-insensitive store). A scalar or sequence sitting on an
    /// intermediate segment is overwritten with an empty mapping, discarding
    /// its content. The final segment is assigned unconditionally.
    ///
    /// The empty key fails with [`ConfigError::InvalidKey`].
    pub fn set(&mut self, key: impl Into<ConfigKey>, value: impl Into<ConfigValue>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::InvalidKey { operation: "set" });
        }
        let (parent, last) = path::resolve_parent_create(&mut self.tree, &key, "set")?;
        parent.insert(last, value.into());
        Ok(())
    }

    /// Removes the value at a key.
    ///
    /// Respects the store's case sensitivity. Fails with
    /// [`ConfigError::KeyNotFound`] if the key is absent and with
    /// [`ConfigError::InvalidKey`] for the empty key.
    pub fn delete(&mut self, key: impl Into<ConfigKey>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::InvalidKey {
                operation: "delete",
            });
        }
        let (parent, last) =
            path::resolve_parent_mut(&mut self.tree, &key, self.case_sensitive, "delete")?;
        if parent.remove(&last).is_none() {
            return Err(ConfigError::KeyNotFound {
                operation: "delete",
                key: key.into_string(),
            });
        }
        Ok(())
    }

    /// Removes every key from the tree.
    ///
    /// The file path and format associations are retained.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Merges another store's tree into this one. See [`merge_map`].
    ///
    /// [`merge_map`]: ConfigStore::merge_map
    pub fn merge(&mut self, other: &ConfigStore) {
        self.merge_map(other.tree.clone());
    }

    /// Merges a map into the tree, one level deep.
    ///
    /// For each top-level key of `data`: when both sides hold a mapping at
    /// that key, the incoming submap's entries are inserted into the existing
    /// submap (submap values are replaced, never merged recursively);
    /// otherwise the incoming value replaces or adds wholesale.
    pub fn merge_map(&mut self, data: ConfigMap) {
        for (key, value) in data {
            if let ConfigValue::Mapping(incoming) = value {
                if let Some(ConfigValue::Mapping(existing)) = self.tree.get_mut(&key) {
                    existing.extend(incoming);
                    continue;
                }
                self.tree.insert(key, ConfigValue::Mapping(incoming));
            } else {
                self.tree.insert(key, value);
            }
        }
    }

    /// Returns an owned snapshot of the tree.
    pub fn data(&self) -> ConfigMap {
        self.tree.clone()
    }

    /// Saves the tree to the file it was loaded from.
    ///
    /// Fails with [`ConfigError::PathResolution`] if no file path is
    /// associated with the store. The format defaults to JSON if none was
    /// ever associated.
    pub fn save(&self) -> Result<()> {
        let target = self.file_path.as_deref().ok_or_else(|| {
            ConfigError::PathResolution {
                path: String::new(),
                message: "no file path associated with this store".to_string(),
            }
        })?;
        self.write_to(target, self.format.unwrap_or(Format::Json))
    }

    /// Saves the tree to a specific file in a specific format.
    ///
    /// The path may contain `$VAR`/`${VAR}` references. Missing parent
    /// directories are created. Saving never changes the store's remembered
    /// path or format.
    pub fn save_to_file(&self, path: &str, format: Format) -> Result<()> {
        let resolved = fs_path::expand_path(path)?;
        self.write_to(&resolved, format)
    }

    fn write_to(&self, target: &Path, format: Format) -> Result<()> {
        let codec = codec_for(format)?;
        let content = codec.encode(&self.tree)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)?;
        tracing::debug!(path = %target.display(), %format, "configuration saved");
        Ok(())
    }

    /// Wraps the store in a thread-safe shared handle.
    pub fn into_shared(self) -> crate::service::SharedConfigStore {
        crate::service::SharedConfigStore::new(self)
    }
}

/// Builder for constructing a [`ConfigStore`].
///
/// # Examples
///
/// ```
/// use nestcfg::domain::Format;
/// use nestcfg::service::ConfigStore;
///
/// let store = ConfigStore::builder()
///     .case_sensitive(false)
///     .format(Format::Yaml)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStoreBuilder {
    case_sensitive: Option<bool>,
    file_path: Option<String>,
    format: Option<Format>,
}

impl ConfigStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether key matching is case-sensitive (default true).
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Associates a default save path with the store.
    ///
    /// The path is expanded and absolutized at [`build`] time.
    ///
    /// [`build`]: ConfigStoreBuilder::build
    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Associates a default save format with the store.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Builds the store.
    ///
    /// An unresolvable file path is silently ignored here; it would fail
    /// again, with a proper error, on the first `save`.
    pub fn build(self) -> ConfigStore {
        let mut store = ConfigStore::new();
        if let Some(case_sensitive) = self.case_sensitive {
            store.case_sensitive = case_sensitive;
        }
        if let Some(raw) = self.file_path {
            store.file_path = fs_path::expand_path(&raw).ok();
        }
        store.format = self.format;
        store
    }
}
