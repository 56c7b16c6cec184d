//! Registry configuration via `opkit.toml`
//!
//! The file is optional. A registry built with `ConverterRegistry::new()`
//! uses `RegistryConfig::default()`; `with_config` takes a loaded one.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "opkit.toml";

/// Registry configuration loaded from `opkit.toml`
///
/// # Example
///
/// ```toml
/// # Backend used by convert_default (unset by default)
/// default_backend = "sql"
///
/// # Log at debug level when a registration replaces a converter
/// log_overrides = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Backend used by `convert_default`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<String>,
    /// Emit a debug event when a registration replaces an existing converter
    #[serde(default = "default_log_overrides")]
    pub log_overrides: bool,
}

fn default_log_overrides() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_backend: None,
            log_overrides: default_log_overrides(),
        }
    }
}

impl RegistryConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# opkit converter registry configuration
#
# Backend used by convert_default. Unset means convert_default fails
# with NoDefaultBackend.
# default_backend = "sql"

# Log at debug level when a registration replaces an existing converter
# (default: true)
log_overrides = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// `path` is only used to label errors.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
