// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-path resolution over configuration trees.
//!
//! Three walks are provided: a read walk that never mutates the tree, a
//! delete walk that returns the parent mapping of the final segment, and a
//! create walk used by writes that materializes missing intermediate
//! mappings.
//!
//! Case-insensitive matching substitutes the first key in iteration order
//! that case-insensitively equals the requested segment. The tree is a
//! `BTreeMap`, so "first" means the lexicographically smallest matching key,
//! even when a key with the exact requested case exists.

use crate::domain::config_value::{ConfigMap, ConfigValue};
use crate::domain::errors::{ConfigError, Result};
use crate::domain::ConfigKey;

/// A node under traversal: either a canonical mapping or a foreign-keyed one
/// that has not been normalized yet.
enum Node<'a> {
    Map(&'a ConfigMap),
    Raw(&'a [(ConfigValue, ConfigValue)]),
}

fn keys_match(actual: &str, requested: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        actual == requested
    } else {
        actual.to_lowercase() == requested.to_lowercase()
    }
}

fn lookup<'a>(
    map: &'a ConfigMap,
    segment: &str,
    case_sensitive: bool,
) -> Option<&'a ConfigValue> {
    if case_sensitive {
        map.get(segment)
    } else {
        map.iter()
            .find(|(key, _)| keys_match(key, segment, false))
            .map(|(_, value)| value)
    }
}

fn raw_lookup<'a>(
    entries: &'a [(ConfigValue, ConfigValue)],
    segment: &str,
    case_sensitive: bool,
) -> Option<&'a ConfigValue> {
    entries
        .iter()
        .find(|(key, _)| keys_match(&key.render_key(), segment, case_sensitive))
        .map(|(_, value)| value)
}

/// Finds the actual key in `map` matching `segment` under the given case
/// policy.
fn fold_key(map: &ConfigMap, segment: &str, case_sensitive: bool) -> Option<String> {
    if case_sensitive {
        map.contains_key(segment).then(|| segment.to_string())
    } else {
        map.keys()
            .find(|key| keys_match(key, segment, false))
            .cloned()
    }
}

/// Rewrites a foreign-keyed mapping at `key` into string-keyed form in place.
///
/// Only the top-level keys are stringified; values move unchanged, so any
/// foreign-keyed mapping deeper in that subtree stays as it is until the
/// normalizer visits it.
fn promote_raw(map: &mut ConfigMap, key: &str) {
    let Some(slot) = map.get_mut(key) else {
        return;
    };
    if matches!(slot, ConfigValue::RawMapping(_)) {
        if let ConfigValue::RawMapping(entries) = std::mem::replace(slot, ConfigValue::Null) {
            let mut promoted = ConfigMap::new();
            for (entry_key, value) in entries {
                promoted.insert(entry_key.render_key(), value);
            }
            *slot = ConfigValue::Mapping(promoted);
        }
    }
}

/// Read walk: resolves `key` to a reference to the value it denotes.
///
/// Foreign-keyed mappings encountered on the way are traversed transiently by
/// comparing stringified keys; the tree is never mutated.
pub(crate) fn resolve_value<'a>(
    root: &'a ConfigMap,
    key: &ConfigKey,
    case_sensitive: bool,
    operation: &'static str,
) -> Result<&'a ConfigValue> {
    let segments: Vec<&str> = key.segments().collect();
    let Some((&last, walk)) = segments.split_last() else {
        return Err(ConfigError::InvalidKey { operation });
    };

    let mut current = Node::Map(root);
    for &segment in walk {
        let value = match current {
            Node::Map(map) => lookup(map, segment, case_sensitive),
            Node::Raw(entries) => raw_lookup(entries, segment, case_sensitive),
        }
        .ok_or_else(|| ConfigError::KeyNotFound {
            operation,
            key: key.to_string(),
        })?;

        current = match value {
            ConfigValue::Mapping(map) => Node::Map(map),
            ConfigValue::RawMapping(entries) => Node::Raw(entries),
            _ => {
                return Err(ConfigError::NotAMapping {
                    operation,
                    key: key.to_string(),
                    segment: segment.to_string(),
                })
            }
        };
    }

    match current {
        Node::Map(map) => lookup(map, last, case_sensitive),
        Node::Raw(entries) => raw_lookup(entries, last, case_sensitive),
    }
    .ok_or_else(|| ConfigError::KeyNotFound {
        operation,
        key: key.to_string(),
    })
}

/// Delete walk: resolves `key` to its parent mapping and the case-folded
/// final segment.
///
/// Foreign-keyed mappings encountered mid-path are promoted to string-keyed
/// form in place (top level only) so the parent reference is always a
/// canonical mapping.
pub(crate) fn resolve_parent_mut<'a>(
    root: &'a mut ConfigMap,
    key: &ConfigKey,
    case_sensitive: bool,
    operation: &'static str,
) -> Result<(&'a mut ConfigMap, String)> {
    let segments: Vec<&str> = key.segments().collect();
    let Some((&last, walk)) = segments.split_last() else {
        return Err(ConfigError::InvalidKey { operation });
    };

    let mut current = root;
    for &segment in walk {
        let actual = fold_key(current, segment, case_sensitive).ok_or_else(|| {
            ConfigError::KeyNotFound {
                operation,
                key: key.to_string(),
            }
        })?;
        promote_raw(current, &actual);
        current = match current.get_mut(&actual) {
            Some(ConfigValue::Mapping(map)) => map,
            Some(_) => {
                return Err(ConfigError::NotAMapping {
                    operation,
                    key: key.to_string(),
                    segment: segment.to_string(),
                })
            }
            None => {
                return Err(ConfigError::KeyNotFound {
                    operation,
                    key: key.to_string(),
                })
            }
        };
    }

    let folded = fold_key(current, last, case_sensitive).unwrap_or_else(|| last.to_string());
    Ok((current, folded))
}

/// Create walk: resolves `key` to its parent mapping and final segment,
/// materializing the path as it goes.
///
/// Segments are always matched verbatim (writes are case-sensitive). Absent
/// intermediates become empty mappings; a scalar or sequence in the way is
/// overwritten with an empty mapping, discarding its content; a foreign-keyed
/// mapping is promoted in place and reused.
pub(crate) fn resolve_parent_create<'a>(
    root: &'a mut ConfigMap,
    key: &ConfigKey,
    operation: &'static str,
) -> Result<(&'a mut ConfigMap, String)> {
    let segments: Vec<&str> = key.segments().collect();
    let Some((&last, walk)) = segments.split_last() else {
        return Err(ConfigError::InvalidKey { operation });
    };

    let mut current = root;
    for &segment in walk {
        promote_raw(current, segment);
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| ConfigValue::Mapping(ConfigMap::new()));
        if !slot.is_mapping() {
            *slot = ConfigValue::Mapping(ConfigMap::new());
        }
        let ConfigValue::Mapping(map) = slot else {
            // slot was just ensured to be a mapping
            return Err(ConfigError::NotAMapping {
                operation,
                key: key.to_string(),
                segment: segment.to_string(),
            });
        };
        current = map;
    }

    Ok((current, last.to_string()))
}
