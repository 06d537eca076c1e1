// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! This module defines the error taxonomy for all store operations. All errors
//! use `thiserror` and carry the operation name and the offending key or path
//! for diagnostics.

use crate::domain::format::Format;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when resolving,
/// converting, mutating, loading, or saving configuration values. It is marked
/// as `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         operation: "get",
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A path segment (or the final key) was not present in the tree.
    #[error("{operation}: key '{key}' not found")]
    KeyNotFound {
        /// The operation that failed (e.g. "get", "delete")
        operation: &'static str,
        /// The full dot-separated key that was requested
        key: String,
    },

    /// An intermediate path segment resolved to a non-mapping value.
    #[error("{operation}: segment '{segment}' of key '{key}' is not a mapping")]
    NotAMapping {
        /// The operation that failed
        operation: &'static str,
        /// The full dot-separated key that was requested
        key: String,
        /// The segment that resolved to a non-mapping value
        segment: String,
    },

    /// A resolved value could not be coerced to the requested type.
    #[error("cannot convert value at key '{key}' to {target_type}: found {found}")]
    TypeConversion {
        /// The key whose value was being converted
        key: String,
        /// The target type name (e.g. "boolean", "integer")
        target_type: &'static str,
        /// The runtime type of the resolved value
        found: &'static str,
    },

    /// A mutation was attempted with an empty key.
    #[error("{operation}: key cannot be empty")]
    InvalidKey {
        /// The operation that failed
        operation: &'static str,
    },

    /// The format tag or file extension is not recognized.
    #[error("unsupported configuration format: {format}")]
    UnsupportedFormat {
        /// The unrecognized format name or extension
        format: String,
    },

    /// A document could not be decoded.
    #[error("failed to parse {format} document")]
    Parse {
        /// The format that was being decoded
        format: Format,
        /// The underlying decoder error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A tree could not be encoded.
    #[error("failed to serialize {format} document")]
    Marshal {
        /// The format that was being encoded
        format: Format,
        /// The underlying encoder error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A user-supplied file path could not be resolved.
    #[error("cannot resolve path '{path}': {message}")]
    PathResolution {
        /// The path that failed to resolve
        path: String,
        /// Why resolution failed
        message: String,
    },

    /// An I/O error occurred while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            operation: "get",
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "get: key 'test.key' not found");
    }

    #[test]
    fn test_not_a_mapping_error() {
        let error = ConfigError::NotAMapping {
            operation: "delete",
            key: "a.b.c".to_string(),
            segment: "b".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "delete: segment 'b' of key 'a.b.c' is not a mapping"
        );
    }

    #[test]
    fn test_type_conversion_error() {
        let error = ConfigError::TypeConversion {
            key: "server.port".to_string(),
            target_type: "integer",
            found: "sequence",
        };
        assert!(error.to_string().contains("server.port"));
        assert!(error.to_string().contains("integer"));
        assert!(error.to_string().contains("sequence"));
    }

    #[test]
    fn test_invalid_key_error() {
        let error = ConfigError::InvalidKey { operation: "set" };
        assert_eq!(error.to_string(), "set: key cannot be empty");
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = ConfigError::UnsupportedFormat {
            format: "toml".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported configuration format: toml");
    }

    #[test]
    fn test_parse_error_carries_format() {
        let error = ConfigError::Parse {
            format: Format::Json,
            source: "unexpected end of input".into(),
        };
        assert_eq!(error.to_string(), "failed to parse json document");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_path_resolution_error() {
        let error = ConfigError::PathResolution {
            path: String::new(),
            message: "empty file path".to_string(),
        };
        assert!(error.to_string().contains("empty file path"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::Io(_)));
    }
}
