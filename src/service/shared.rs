// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-safe shared configuration store.
//!
//! [`SharedConfigStore`] wraps a [`ConfigStore`] in `Arc<RwLock<_>>` so that
//! many readers proceed concurrently while writers take exclusive access.
//! Cloning the handle is cheap and every clone refers to the same store.

use crate::domain::{ConfigKey, ConfigMap, ConfigValue, Format, Result};
use crate::service::ConfigStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, thread-safe handle around a [`ConfigStore`].
///
/// Read operations take a shared lock and write operations an exclusive
/// lock. Saving takes only a shared lock since it never mutates the store.
/// A lock poisoned by a panicking thread is recovered rather than
/// propagated; the store's tree is a plain data structure and stays
/// structurally valid.
///
/// # Examples
///
/// ```
/// use nestcfg::prelude::*;
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let store = ConfigStore::new().into_shared();
///
/// let writer = store.clone();
/// writer.set("server.port", 8080)?;
///
/// assert_eq!(store.get_int("server.port")?, 8080);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SharedConfigStore {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfigStore {
    /// Wraps a store in a shared handle.
    pub fn new(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Retrieves the raw value at a key. See [`ConfigStore::get`].
    pub fn get(&self, key: impl Into<ConfigKey>) -> Result<ConfigValue> {
        self.read().get(key)
    }

    /// Retrieves a value coerced to a `String`. See [`ConfigStore::get_string`].
    pub fn get_string(&self, key: impl Into<ConfigKey>) -> Result<String> {
        self.read().get_string(key)
    }

    /// Retrieves a value coerced to a boolean. See [`ConfigStore::get_bool`].
    pub fn get_bool(&self, key: impl Into<ConfigKey>) -> Result<bool> {
        self.read().get_bool(key)
    }

    /// Retrieves a value coerced to an `i64`. See [`ConfigStore::get_int`].
    pub fn get_int(&self, key: impl Into<ConfigKey>) -> Result<i64> {
        self.read().get_int(key)
    }

    /// Retrieves a value coerced to an `f64`. See [`ConfigStore::get_float`].
    pub fn get_float(&self, key: impl Into<ConfigKey>) -> Result<f64> {
        self.read().get_float(key)
    }

    /// Retrieves a value coerced to a vector of strings.
    /// See [`ConfigStore::get_string_vec`].
    pub fn get_string_vec(&self, key: impl Into<ConfigKey>) -> Result<Vec<String>> {
        self.read().get_string_vec(key)
    }

    /// Returns `true` if a value exists at the key.
    pub fn has(&self, key: impl Into<ConfigKey>) -> bool {
        self.read().has(key)
    }

    /// Writes a value at a key. See [`ConfigStore::set`].
    pub fn set(&self, key: impl Into<ConfigKey>, value: impl Into<ConfigValue>) -> Result<()> {
        self.write().set(key, value)
    }

    /// Removes the value at a key. See [`ConfigStore::delete`].
    pub fn delete(&self, key: impl Into<ConfigKey>) -> Result<()> {
        self.write().delete(key)
    }

    /// Removes every key from the tree.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Merges another store's tree into this one. See [`ConfigStore::merge`].
    pub fn merge(&self, other: &ConfigStore) {
        self.write().merge(other);
    }

    /// Merges a map into the tree, one level deep.
    /// See [`ConfigStore::merge_map`].
    pub fn merge_map(&self, data: ConfigMap) {
        self.write().merge_map(data);
    }

    /// Loads a document from text, replacing the current tree.
    /// See [`ConfigStore::load_str`].
    pub fn load_str(&self, content: &str, format: Format) -> Result<()> {
        self.write().load_str(content, format)
    }

    /// Loads a configuration file, replacing the current tree.
    /// See [`ConfigStore::load_file`].
    pub fn load_file(&self, path: &str) -> Result<()> {
        self.write().load_file(path)
    }

    /// Saves the tree to the file it was loaded from.
    /// See [`ConfigStore::save`].
    pub fn save(&self) -> Result<()> {
        self.read().save()
    }

    /// Saves the tree to a specific file in a specific format.
    /// See [`ConfigStore::save_to_file`].
    pub fn save_to_file(&self, path: &str, format: Format) -> Result<()> {
        self.read().save_to_file(path, format)
    }

    /// Returns an owned snapshot of the tree.
    pub fn data(&self) -> ConfigMap {
        self.read().data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let store = ConfigStore::new().into_shared();
        let other = store.clone();

        store.set("shared.flag", true).unwrap();
        assert!(other.get_bool("shared.flag").unwrap());
    }

    #[test]
    fn test_load_and_typed_reads() {
        let store = ConfigStore::new().into_shared();
        store
            .load_str(r#"{"server": {"port": 8080}}"#, Format::Json)
            .unwrap();

        assert_eq!(store.get_int("server.port").unwrap(), 8080);
        assert!(store.has("server.port"));
        assert!(!store.has("server.host"));
    }

    #[test]
    fn test_delete_and_clear() {
        let store = ConfigStore::new().into_shared();
        store.set("a.b", 1).unwrap();
        store.set("a.c", 2).unwrap();

        store.delete("a.b").unwrap();
        assert!(!store.has("a.b"));
        assert!(store.has("a.c"));

        store.clear();
        assert!(!store.has("a.c"));
    }

    #[test]
    fn test_merge_map() {
        let store = ConfigStore::new().into_shared();
        store.set("a.x", 1).unwrap();

        let mut incoming = ConfigMap::new();
        let mut sub = ConfigMap::new();
        sub.insert("y".to_string(), ConfigValue::Integer(2));
        incoming.insert("a".to_string(), ConfigValue::Mapping(sub));

        store.merge_map(incoming);
        assert_eq!(store.get_int("a.x").unwrap(), 1);
        assert_eq!(store.get_int("a.y").unwrap(), 2);
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let store = ConfigStore::new().into_shared();
        let mut handles = Vec::new();

        for worker in 0..8 {
            let handle = store.clone();
            handles.push(thread::spawn(move || {
                let key = format!("workers.w{worker}");
                for round in 0..50 {
                    handle.set(key.as_str(), round).unwrap();
                    let seen = handle.get_int(key.as_str()).unwrap();
                    assert!((0..50).contains(&seen));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        for worker in 0..8 {
            let key = format!("workers.w{worker}");
            assert_eq!(store.get_int(key.as_str()).unwrap(), 49);
        }
    }
}
