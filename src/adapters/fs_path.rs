// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem path resolution for configuration files.
//!
//! User-supplied paths may contain `$VAR` and `${VAR}` environment variable
//! references; this module expands them, absolutizes relative paths against
//! the current directory, cleans the result lexically, and sniffs the file
//! extension to pick a document format.

use crate::domain::{ConfigError, Format, Result};
use std::path::{Component, Path, PathBuf};

/// Expands and absolutizes a user-supplied configuration file path.
///
/// `$VAR` and `${VAR}` references are replaced with the value of the named
/// environment variable; an unset variable expands to the empty string.
/// Relative paths are joined onto the current directory, and the result is
/// cleaned lexically (`.` components dropped, `..` components popped).
///
/// # Examples
///
/// ```
/// use nestcfg::adapters::fs_path::expand_path;
///
/// let path = expand_path("settings/../config.yaml").unwrap();
/// assert!(path.is_absolute());
/// assert!(path.ends_with("config.yaml"));
/// ```
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(ConfigError::PathResolution {
            path: String::new(),
            message: "empty file path".to_string(),
        });
    }

    let expanded = if raw.contains('$') {
        expand_env(raw)
    } else {
        raw.to_string()
    };

    let path = PathBuf::from(expanded);
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(clean_path(&absolute))
}

/// Sniffs the document format from a file extension.
///
/// Recognized extensions are `json`, `yaml` and `yml` (case-insensitive);
/// a missing or unrecognized extension fails with
/// [`ConfigError::UnsupportedFormat`].
///
/// # Examples
///
/// ```
/// use nestcfg::adapters::fs_path::detect_format;
/// use nestcfg::domain::Format;
/// use std::path::Path;
///
/// assert_eq!(detect_format(Path::new("/etc/app/config.yml")).unwrap(), Format::Yaml);
/// assert!(detect_format(Path::new("/etc/app/config")).is_err());
/// ```
pub fn detect_format(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ConfigError::UnsupportedFormat {
            format: "(missing file extension)".to_string(),
        })?;
    Format::from_name(extension)
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Substitutes `$VAR` and `${VAR}` references. A `$` followed by neither a
/// brace nor a name character is kept verbatim, as is an unterminated `${`.
fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        if let Some(braced) = rest.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&env_or_empty(&braced[..end]));
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push_str("${");
                    rest = braced;
                }
            }
        } else {
            let name_len = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .count();
            if name_len == 0 {
                out.push('$');
            } else {
                out.push_str(&env_or_empty(&rest[..name_len]));
                rest = &rest[name_len..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Lexical path cleaning for absolute paths: drops `.` components and pops
/// on `..` (a `..` at the root is dropped).
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_empty_fails() {
        let error = expand_path("").unwrap_err();
        assert!(matches!(error, ConfigError::PathResolution { .. }));
    }

    #[test]
    fn test_expand_path_absolutizes_relative() {
        let path = expand_path("config.json").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("config.json"));
    }

    #[test]
    fn test_expand_path_keeps_absolute() {
        let path = expand_path("/etc/app/config.yaml").unwrap();
        assert_eq!(path, PathBuf::from("/etc/app/config.yaml"));
    }

    #[test]
    fn test_expand_path_cleans_dots() {
        let path = expand_path("/etc/./app/../other/config.json").unwrap();
        assert_eq!(path, PathBuf::from("/etc/other/config.json"));
    }

    #[test]
    fn test_expand_env_braced_and_bare() {
        std::env::set_var("NESTCFG_TEST_DIR", "/opt/app");
        assert_eq!(expand_env("${NESTCFG_TEST_DIR}/c.json"), "/opt/app/c.json");
        assert_eq!(expand_env("$NESTCFG_TEST_DIR/c.json"), "/opt/app/c.json");
        std::env::remove_var("NESTCFG_TEST_DIR");
    }

    #[test]
    fn test_expand_env_unset_is_empty() {
        assert_eq!(expand_env("/a/${NESTCFG_TEST_UNSET}/b"), "/a//b");
    }

    #[test]
    fn test_expand_env_literal_dollar() {
        assert_eq!(expand_env("/a/$/b"), "/a/$/b");
        assert_eq!(expand_env("/a/${unterminated"), "/a/${unterminated");
    }

    #[test]
    fn test_detect_format_json() {
        assert_eq!(
            detect_format(Path::new("/x/config.json")).unwrap(),
            Format::Json
        );
    }

    #[test]
    fn test_detect_format_yaml_variants() {
        assert_eq!(
            detect_format(Path::new("/x/config.yaml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            detect_format(Path::new("/x/config.yml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            detect_format(Path::new("/x/CONFIG.YML")).unwrap(),
            Format::Yaml
        );
    }

    #[test]
    fn test_detect_format_missing_extension() {
        let error = detect_format(Path::new("/x/config")).unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_detect_format_unrecognized_extension() {
        let error = detect_format(Path::new("/x/config.toml")).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::UnsupportedFormat { format } if format == "toml"
        ));
    }

    #[test]
    fn test_clean_path_parent_at_root() {
        assert_eq!(
            clean_path(Path::new("/../etc/config.json")),
            PathBuf::from("/etc/config.json")
        );
    }
}
