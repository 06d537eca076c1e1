// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture nested-configuration crate.
//!
//! This crate provides an in-memory configuration store over JSON and YAML
//! documents, with dot-separated path access (`"server.port"`), typed value
//! coercion, shallow merging, and a thread-safe shared handle.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and path resolution (`ConfigKey`, `ConfigValue`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigCodec`)
//! - **Adapters**: Codec implementations (JSON, YAML) and filesystem path handling
//! - **Service**: The configuration store and its thread-safe wrapper
//!
//! # Features
//!
//! - **Dot-Path Access**: Read, write, and delete values addressed by dot-separated keys
//! - **Type Coercion**: String, bool, integer, float, and string-vector accessors with
//!   permissive conversions (`"yes"` is true, `3.7` truncates to `3`)
//! - **Case-Insensitive Lookups**: Optional case-insensitive key matching for reads
//! - **Key Normalization**: YAML mappings with non-string keys are rewritten to
//!   string-keyed form on load
//! - **Shallow Merging**: One-level-deep merge of configuration trees
//! - **Persistence**: Load and save files with `$VAR`/`${VAR}` path expansion and
//!   extension-based format detection
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//!
//! # Quick Start
//!
//! ```rust
//! use nestcfg::prelude::*;
//!
//! # fn main() -> nestcfg::domain::Result<()> {
//! let mut store = ConfigStore::new();
//! store.load_str(
//!     r#"{"app": {"name": "TestApp"}, "server": {"port": 8080}}"#,
//!     Format::Json,
//! )?;
//!
//! assert_eq!(store.get_string("app.name")?, "TestApp");
//! assert_eq!(store.get_int("server.port")?, 8080);
//!
//! store.set("server.host", "localhost")?;
//! store.delete("app.name")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigKey, ConfigMap, ConfigValue, Format, Result};
    pub use crate::ports::ConfigCodec;
    pub use crate::service::{ConfigStore, ConfigStoreBuilder, SharedConfigStore};

    // Re-export adapters based on feature flags
    pub use crate::adapters::JsonCodec;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlCodec;
}
