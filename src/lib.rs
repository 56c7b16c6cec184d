//! opkit - backend-agnostic operation algebra
//!
//! opkit describes data operations (filter conditions, field updates, sort
//! orders and page requests) as plain, introspectable values, and defers the
//! choice of target representation to a converter registry keyed by
//! `(backend, operation)`.
//!
//! # Quick Start
//!
//! ```
//! use opkit::condition::{and, equal, not_equal};
//! use opkit::{ConverterRegistry, Oper};
//!
//! let registry: ConverterRegistry<String> = ConverterRegistry::new();
//! let render = |_: &str, oper: &dyn Oper| {
//!     let value = oper.value().as_scalar().map(|v| v.to_string()).unwrap_or_default();
//!     format!("`{}`={}", oper.key(), value)
//! };
//! registry.register("sql", "Equal", render);
//! registry.register("sql", "NotEqual", render);
//!
//! let cond = and([equal("id", 123), not_equal("deleted", false)]);
//! let parts = registry
//!     .convert_all("sql", cond.value().as_conditions().unwrap_or_default())
//!     .unwrap();
//! assert_eq!(parts.join(" AND "), "`id`=123 AND `deleted`=false");
//! ```
//!
//! # Architecture
//!
//! - `opkit-core`: the operation model and its constructors. Knows nothing
//!   about backends.
//! - `opkit-registry`: the converter registry, its config and errors. Sees
//!   operations only through the `Oper` read interface.

// Re-export the public API of both crates
pub use opkit_core::*;
pub use opkit_registry::{
    ConfigError, ConvertError, Converter, ConverterRegistry, RegistryConfig, RegistryError,
    CONFIG_FILE_NAME,
};
pub use opkit_registry::{config, error, registry};
