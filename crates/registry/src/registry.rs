//! Converter Registry
//!
//! Maps `(backend, operation)` to a function that turns one operation into
//! that backend's representation (a SQL fragment, a filter document, an RPC
//! message). Neither the operation model nor the registry knows about the
//! other's contents: the registry only sees the operation name, and a
//! converter only sees the descriptor through [`Oper`].
//!
//! ## Contract
//!
//! - Registration with an empty backend or operation name is a wiring defect
//!   and panics ([`ConverterRegistry::try_register`] reports it instead).
//! - Re-registering a pair replaces the earlier converter. Last one wins.
//! - Lookup never fabricates a converter. An unregistered pair is `None`,
//!   and `convert` turns that into [`ConvertError::NoConverter`].
//!
//! ## Sharing
//!
//! The registry is an explicit object, built once at start-up and passed to
//! whatever converts. Wrap it in an `Arc` to share it across threads:
//! registration takes the write lock, lookup the read lock.
//!
//! ```
//! use opkit_core::condition::equal;
//! use opkit_core::Oper;
//! use opkit_registry::ConverterRegistry;
//!
//! let registry: ConverterRegistry<String> = ConverterRegistry::new();
//! registry.register("sql", "Equal", |_op, oper| format!("`{}`=?", oper.key()));
//!
//! assert_eq!(registry.convert("sql", &equal("id", 1)).unwrap(), "`id`=?");
//! assert!(registry.lookup("sql", "Like").is_none());
//! ```

use crate::config::RegistryConfig;
use crate::error::{ConvertError, RegistryError};
use opkit_core::Oper;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Conversion function for one (backend, operation) pair
///
/// Called with the operation name and the operation being converted.
pub type Converter<T> = Arc<dyn Fn(&str, &dyn Oper) -> T + Send + Sync>;

type BackendTable<T> = HashMap<String, Converter<T>>;

/// Registry of converters producing `T`
pub struct ConverterRegistry<T> {
    converters: RwLock<HashMap<String, BackendTable<T>>>,
    config: RegistryConfig,
}

impl<T> ConverterRegistry<T> {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Configuration this registry was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a converter for `(backend, op)`
    ///
    /// # Panics
    ///
    /// Panics if `backend` or `op` is empty. Registration happens during
    /// start-up wiring, where a malformed entry is a defect to fix, not a
    /// condition to handle.
    pub fn register<F>(&self, backend: &str, op: &str, converter: F)
    where
        F: Fn(&str, &dyn Oper) -> T + Send + Sync + 'static,
    {
        if let Err(e) = self.try_register(backend, op, converter) {
            panic!("{}", e);
        }
    }

    /// Register a converter, reporting malformed names instead of panicking
    ///
    /// Returns the converter this registration replaced, if any.
    pub fn try_register<F>(
        &self,
        backend: &str,
        op: &str,
        converter: F,
    ) -> Result<Option<Converter<T>>, RegistryError>
    where
        F: Fn(&str, &dyn Oper) -> T + Send + Sync + 'static,
    {
        self.insert(backend, op, Arc::new(converter))
    }

    /// Register an already shared converter
    ///
    /// Lets one function serve several operations without re-boxing it.
    pub fn register_shared(
        &self,
        backend: &str,
        op: &str,
        converter: Converter<T>,
    ) -> Result<Option<Converter<T>>, RegistryError> {
        self.insert(backend, op, converter)
    }

    fn insert(
        &self,
        backend: &str,
        op: &str,
        converter: Converter<T>,
    ) -> Result<Option<Converter<T>>, RegistryError> {
        if backend.is_empty() {
            return Err(RegistryError::EmptyBackend);
        }
        if op.is_empty() {
            return Err(RegistryError::EmptyOperation);
        }

        let mut converters = self.converters.write();
        let table = converters.entry(backend.to_string()).or_insert_with(|| {
            info!(backend, "Registered backend");
            HashMap::new()
        });
        let replaced = table.insert(op.to_string(), converter);

        if replaced.is_some() {
            if self.config.log_overrides {
                debug!(backend, op, "Replaced existing converter");
            }
        } else {
            debug!(backend, op, "Registered converter");
        }
        Ok(replaced)
    }

    /// Converter registered for `(backend, op)`
    ///
    /// Returns `None` when nothing is registered, including for empty names.
    /// The read lock is released before returning, so a converter may call
    /// back into the registry (e.g. to convert the children of a composite).
    pub fn lookup(&self, backend: &str, op: &str) -> Option<Converter<T>> {
        self.converters
            .read()
            .get(backend)
            .and_then(|table| table.get(op))
            .cloned()
    }

    /// True if a converter is registered for `(backend, op)`
    pub fn contains(&self, backend: &str, op: &str) -> bool {
        self.converters
            .read()
            .get(backend)
            .map_or(false, |table| table.contains_key(op))
    }

    /// Operation names registered for `backend`, sorted
    pub fn operations(&self, backend: &str) -> Vec<String> {
        let mut ops: Vec<String> = self
            .converters
            .read()
            .get(backend)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();
        ops.sort();
        ops
    }

    /// Backend names with at least one converter, sorted
    pub fn backends(&self) -> Vec<String> {
        let mut backends: Vec<String> = self.converters.read().keys().cloned().collect();
        backends.sort();
        backends
    }

    /// Total number of registered converters
    pub fn len(&self) -> usize {
        self.converters.read().values().map(HashMap::len).sum()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert one operation for `backend`
    ///
    /// # Errors
    ///
    /// [`ConvertError::NoConverter`] when no converter is registered for the
    /// operation's name. There is no passthrough fallback.
    pub fn convert<O: Oper + ?Sized>(&self, backend: &str, oper: &O) -> Result<T, ConvertError> {
        let op = oper.op();
        match self.lookup(backend, op) {
            Some(converter) => Ok(converter(op, oper.as_op())),
            None => {
                debug!(backend, op, "No converter registered");
                Err(ConvertError::NoConverter {
                    backend: backend.to_string(),
                    op: op.to_string(),
                })
            }
        }
    }

    /// Convert a sequence of operations in order
    ///
    /// Stops at the first operation without a converter.
    pub fn convert_all<O: Oper>(&self, backend: &str, opers: &[O]) -> Result<Vec<T>, ConvertError> {
        opers.iter().map(|oper| self.convert(backend, oper)).collect()
    }

    /// Convert for the configured default backend
    pub fn convert_default<O: Oper + ?Sized>(&self, oper: &O) -> Result<T, ConvertError> {
        let backend = self
            .config
            .default_backend
            .as_deref()
            .ok_or(ConvertError::NoDefaultBackend)?;
        self.convert(backend, oper)
    }
}

impl<T> Default for ConverterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ConverterRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converters = self.converters.read();
        let mut backends: Vec<(&String, usize)> =
            converters.iter().map(|(name, table)| (name, table.len())).collect();
        backends.sort();
        f.debug_struct("ConverterRegistry")
            .field("backends", &backends)
            .field("config", &self.config)
            .finish()
    }
}
