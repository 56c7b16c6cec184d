//! Core types for opkit
//!
//! This crate defines the backend-agnostic operation algebra:
//! - Value: scalar operand type
//! - Payload: closed set of operand shapes (scalar, list, key, pair, page, children)
//! - Op: the operation descriptor (op name, key, payload, kind, tags)
//! - Capabilities: Condition, Updater, Sorter, Paginator, and the Operation sum
//! - Constructors: `condition`, `updater`, `sorter`, `paginator` modules
//! - Lookup: key containment over operation sequences
//! - Keys: shared key names and soft-delete conditions
//! - Lazy: deferred descriptor transforms
//!
//! Nothing here knows about a storage backend. Turning an operation into a
//! backend fragment is the job of a converter registry (see `opkit-registry`).
//!
//! ```
//! use opkit_core::condition::{and, equal, not_equal};
//! use opkit_core::{Oper, Payload};
//!
//! let cond = and([equal("id", 123), not_equal("deleted", false)]);
//! assert_eq!(cond.op(), "And");
//! assert!(matches!(cond.value(), Payload::Conditions(children) if children.len() == 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod capability;
pub mod condition;
pub mod descriptor;
pub mod keys;
pub mod lazy;
pub mod lookup;
pub mod paginator;
pub mod payload;
pub mod sorter;
pub mod updater;
pub mod value;

// Re-export commonly used types and traits
pub use capability::{
    Capability, Condition, KindMismatch, Oper, Operation, Paginator, Sorter, Updater,
};
pub use descriptor::{key, Kind, Op, SEP};
pub use lazy::Lazy;
pub use lookup::{contains, contains_key, find_key};
pub use paginator::{get_limit, paginate};
pub use payload::{KeyValue, Limiter, PageSize, Payload};
pub use updater::batch;
pub use value::Value;
