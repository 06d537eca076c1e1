// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing codec and filesystem implementations.
//!
//! This module contains the concrete implementations of the codec trait
//! defined in the ports layer, plus filesystem helpers for resolving
//! user-supplied configuration file paths.

pub mod fs_path;
pub mod json_codec;
#[cfg(feature = "yaml")]
pub mod yaml_codec;

use crate::domain::{Format, Result};
use crate::ports::ConfigCodec;

// Re-export adapters
pub use json_codec::JsonCodec;
#[cfg(feature = "yaml")]
pub use yaml_codec::YamlCodec;

/// Returns the codec for a format tag.
///
/// Fails with [`UnsupportedFormat`](crate::domain::ConfigError::UnsupportedFormat)
/// when the format's codec is
/// not compiled in (YAML support is gated behind the default-on `yaml`
/// feature).
pub fn codec_for(format: Format) -> Result<Box<dyn ConfigCodec>> {
    match format {
        Format::Json => Ok(Box::new(JsonCodec::new())),
        #[cfg(feature = "yaml")]
        Format::Yaml => Ok(Box::new(YamlCodec::new())),
        #[cfg(not(feature = "yaml"))]
        Format::Yaml => Err(crate::domain::ConfigError::UnsupportedFormat {
            format: format.as_str().to_string(),
        }),
    }
}
