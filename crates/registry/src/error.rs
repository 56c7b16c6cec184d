//! Error types for the converter registry
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! Registration errors are programmer errors; conversion errors report data
//! the registry does not have; config errors wrap file and format failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Backend name was empty
    #[error("converter registration requires a backend name")]
    EmptyBackend,

    /// Operation name was empty
    #[error("converter registration requires an operation name")]
    EmptyOperation,
}

/// Conversion could not run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Nothing registered for this (backend, op) pair
    #[error("no converter registered for operation '{op}' on backend '{backend}'")]
    NoConverter {
        /// Backend name
        backend: String,
        /// Operation name
        op: String,
    },

    /// `convert_default` called without a configured default backend
    #[error("no default backend configured")]
    NoDefaultBackend,
}

/// Config file could not be loaded or stored
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file is not valid config TOML
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// Writing the file failed
    #[error("failed to write config file '{}': {source}", path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Serializing the config failed
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
