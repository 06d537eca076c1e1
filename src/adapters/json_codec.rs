// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON codec adapter.
//!
//! Decodes and encodes configuration documents as JSON via `serde_json`.
//! JSON mappings are always string-keyed, so decoding never produces a
//! foreign-keyed mapping.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, Format, Result};
use crate::ports::ConfigCodec;

/// Codec for JSON configuration documents.
///
/// # Examples
///
/// ```
/// use nestcfg::adapters::JsonCodec;
/// use nestcfg::ports::ConfigCodec;
///
/// let codec = JsonCodec::new();
/// let tree = codec.decode(r#"{"server": {"port": 8080}}"#).unwrap();
/// let map = tree.as_mapping().unwrap();
/// assert!(map.contains_key("server"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Creates a new JSON codec.
    pub fn new() -> Self {
        JsonCodec
    }
}

fn from_json(value: serde_json::Value) -> ConfigValue {
    match value {
        serde_json::Value::Null => ConfigValue::Null,
        serde_json::Value::Bool(b) => ConfigValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                // u64 values above i64::MAX land here and lose precision
                ConfigValue::Float(f)
            } else {
                ConfigValue::Null
            }
        }
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Array(items) => {
            ConfigValue::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => ConfigValue::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

impl ConfigCodec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn decode(&self, content: &str) -> Result<ConfigValue> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                format: Format::Json,
                source: Box::new(e),
            })?;
        Ok(from_json(value))
    }

    fn encode(&self, tree: &ConfigMap) -> Result<String> {
        serde_json::to_string_pretty(tree).map_err(|e| ConfigError::Marshal {
            format: Format::Json,
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scalars() {
        let codec = JsonCodec::new();
        let tree = codec
            .decode(r#"{"s": "x", "i": 3, "f": 2.5, "b": true, "n": null}"#)
            .unwrap();
        let map = tree.as_mapping().unwrap();

        assert_eq!(map["s"], ConfigValue::from("x"));
        assert_eq!(map["i"], ConfigValue::Integer(3));
        assert_eq!(map["f"], ConfigValue::Float(2.5));
        assert_eq!(map["b"], ConfigValue::Bool(true));
        assert_eq!(map["n"], ConfigValue::Null);
    }

    #[test]
    fn test_decode_nested() {
        let codec = JsonCodec::new();
        let tree = codec
            .decode(r#"{"server": {"host": "localhost", "tags": ["a", "b"]}}"#)
            .unwrap();
        let server = tree.as_mapping().unwrap()["server"].as_mapping().unwrap();

        assert_eq!(server["host"], ConfigValue::from("localhost"));
        assert_eq!(
            server["tags"],
            ConfigValue::Sequence(vec![ConfigValue::from("a"), ConfigValue::from("b")])
        );
    }

    #[test]
    fn test_decode_invalid() {
        let codec = JsonCodec::new();
        let error = codec.decode("{not json").unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Parse { format: Format::Json, .. }
        ));
    }

    #[test]
    fn test_decode_non_object_top_level_is_allowed_here() {
        // Top-level shape enforcement is the store's job, not the codec's.
        let codec = JsonCodec::new();
        let tree = codec.decode("[1, 2]").unwrap();
        assert!(matches!(tree, ConfigValue::Sequence(_)));
    }

    #[test]
    fn test_encode_round_trip() {
        let codec = JsonCodec::new();
        let tree = codec
            .decode(r#"{"app": {"name": "TestApp"}, "port": 8080}"#)
            .unwrap();
        let map = tree.into_mapping().unwrap();

        let text = codec.encode(&map).unwrap();
        let again = codec.decode(&text).unwrap().into_mapping().unwrap();
        assert_eq!(map, again);
    }

    #[test]
    fn test_encode_is_pretty_printed() {
        let codec = JsonCodec::new();
        let mut map = ConfigMap::new();
        map.insert("key".to_string(), ConfigValue::from("value"));

        let text = codec.encode(&map).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("  \"key\": \"value\""));
    }

    #[test]
    fn test_format_tag() {
        assert_eq!(JsonCodec::new().format(), Format::Json);
    }
}
