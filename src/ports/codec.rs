// SPDX-License-Identifier: MIT OR Apache-2.0

//! Codec trait for configuration document formats.
//!
//! A codec turns document text into a generic [`ConfigValue`] tree and a
//! string-keyed tree back into document text. The store feeds decoder output
//! through the key normalizer before adopting it, so codecs are free to
//! surface foreign-keyed mappings as
//! [`ConfigValue::RawMapping`](crate::domain::ConfigValue::RawMapping).

use crate::domain::{ConfigMap, ConfigValue, Format, Result};

/// Decodes and encodes one configuration document format.
///
/// # Examples
///
/// ```
/// use nestcfg::adapters::JsonCodec;
/// use nestcfg::ports::ConfigCodec;
///
/// let codec = JsonCodec::new();
/// let tree = codec.decode(r#"{"port": 8080}"#).unwrap();
/// assert!(tree.as_mapping().is_some());
/// ```
pub trait ConfigCodec {
    /// The format this codec handles.
    fn format(&self) -> Format;

    /// Decodes document text into a generic value tree.
    ///
    /// The result is whatever shape the document has; the caller enforces the
    /// top-level-mapping requirement and runs normalization.
    fn decode(&self, content: &str) -> Result<ConfigValue>;

    /// Encodes a configuration tree into document text.
    fn encode(&self, tree: &ConfigMap) -> Result<String>;
}
