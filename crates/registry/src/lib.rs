//! Converter registry for opkit
//!
//! Resolves `(backend, operation)` to a conversion function and runs it:
//! - ConverterRegistry: explicit, thread-safe registry object
//! - RegistryConfig: optional `opkit.toml` settings (default backend, override logging)
//! - RegistryError, ConvertError, ConfigError: one error type per failure domain

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod registry;

pub use config::{RegistryConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConvertError, RegistryError};
pub use registry::{Converter, ConverterRegistry};
