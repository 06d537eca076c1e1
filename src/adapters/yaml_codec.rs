// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML codec adapter.
//!
//! Decodes and encodes configuration documents as YAML via `serde_yaml`.
//! YAML allows mapping keys of any scalar type; a mapping with at least one
//! non-string key decodes to a [`ConfigValue::RawMapping`], which the store's
//! normalization pass rewrites into string-keyed form.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Format, Result};
use crate::ports::ConfigCodec;

/// Codec for YAML configuration documents.
///
/// # Examples
///
/// ```
/// use nestcfg::adapters::YamlCodec;
/// use nestcfg::ports::ConfigCodec;
///
/// let codec = YamlCodec::new();
/// let tree = codec.decode("server:\n  host: localhost\n").unwrap();
/// assert!(tree.as_mapping().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates a new YAML codec.
    pub fn new() -> Self {
        YamlCodec
    }
}

fn from_yaml(value: serde_yaml::Value) -> ConfigValue {
    match value {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                ConfigValue::Float(f)
            } else {
                ConfigValue::Null
            }
        }
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(seq) => {
            ConfigValue::Sequence(seq.into_iter().map(from_yaml).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let entries: Vec<(ConfigValue, ConfigValue)> = map
                .into_iter()
                .map(|(key, value)| (from_yaml(key), from_yaml(value)))
                .collect();

            if entries
                .iter()
                .all(|(key, _)| matches!(key, ConfigValue::String(_)))
            {
                let mut out = ConfigMap::new();
                for (key, value) in entries {
                    if let ConfigValue::String(key) = key {
                        out.insert(key, value);
                    }
                }
                ConfigValue::Mapping(out)
            } else {
                ConfigValue::RawMapping(entries)
            }
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

impl ConfigCodec for YamlCodec {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn decode(&self, content: &str) -> Result<ConfigValue> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                format: Format::Yaml,
                source: Box::new(e),
            })?;
        Ok(from_yaml(value))
    }

    fn encode(&self, tree: &ConfigMap) -> Result<String> {
        serde_yaml::to_string(tree).map_err(|e| ConfigError::Marshal {
            format: Format::Yaml,
            source: Box::new(e),
        })
    }
}
