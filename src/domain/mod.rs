// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the configuration tree value types, dot-path
//! resolution, format tags, and the error taxonomy. It is independent of any
//! external concerns; all parsing and I/O lives in the adapters layer.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod format;

pub(crate) mod path;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigMap, ConfigValue};
pub use errors::{ConfigError, Result};
pub use format::Format;
