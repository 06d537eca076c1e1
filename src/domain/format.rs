// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration document format tags.
//!
//! A [`Format`] identifies how a document is encoded on disk. The textual
//! names `json`, `yaml` and `yml` all parse to a tag; `yml` is an alias of
//! `yaml` and never appears as an output name.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// The encoding of a configuration document.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::format::Format;
///
/// let format: Format = "yml".parse().unwrap();
/// assert_eq!(format, Format::Yaml);
/// assert_eq!(format.as_str(), "yaml");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON documents (`.json`).
    Json,
    /// YAML documents (`.yaml`, `.yml`).
    Yaml,
}

impl Format {
    /// Returns the canonical name of the format.
    ///
    /// The `yml` spelling is an input alias only; the canonical name of YAML
    /// is always `yaml`.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Parses a format from its textual name or file extension.
    ///
    /// Matching is case-insensitive. Recognized names are `json`, `yaml` and
    /// `yml`; anything else fails with [`ConfigError::UnsupportedFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::format::Format;
    ///
    /// assert_eq!(Format::from_name("JSON").unwrap(), Format::Json);
    /// assert!(Format::from_name("toml").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ConfigError::UnsupportedFormat {
                format: name.to_string(),
            }),
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Format::from_name(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
