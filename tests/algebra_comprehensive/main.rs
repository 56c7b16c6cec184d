//! Algebra Comprehensive Test Suite
//!
//! Exercises the operation model and the converter registry together, the
//! way a backend builder uses them: build operation trees with the
//! constructors, then walk them through registered converters.
//!
//! ## Modules
//!
//! - `descriptor_tests.rs` - mutators, scoping, tags, serde
//! - `composite_tests.rs` - And/Or/Orders/Batch shapes, pagination limits
//! - `lookup_tests.rs` - key containment over mixed sequences
//! - `registry_tests.rs` - register/lookup contract, config, errors
//! - `sql_conversion_tests.rs` - end-to-end rendering through the reference backend
//! - `concurrency_tests.rs` - shared registry under concurrent use
//! - `property_tests.rs` - proptest properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test algebra_comprehensive
//! cargo test --test algebra_comprehensive sql_conversion
//! ```

#[path = "../common/mod.rs"]
mod common;

mod composite_tests;
mod concurrency_tests;
mod descriptor_tests;
mod registry_tests;
