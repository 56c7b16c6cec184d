//! Sorter constructors
//!
//! `Order` stores its direction token as a string scalar. The token is not
//! validated here; rejecting anything other than [`SORT_ASC`]/[`SORT_DESC`]
//! is up to the converter.

use crate::capability::{Oper, Sorter};
use crate::descriptor::{key, Op};
use crate::payload::Payload;
use crate::value::Value;

/// Single-key sort
pub const ORDER: &str = "Order";
/// Multi-key sort
pub const ORDERS: &str = "Orders";

/// Ascending direction token
pub const SORT_ASC: &str = "Asc";
/// Descending direction token
pub const SORT_DESC: &str = "Desc";

impl Op {
    /// Sort by this key in `direction`
    pub fn order(self, direction: impl Into<String>) -> Sorter {
        self.with_op(ORDER)
            .with_value(Payload::Scalar(Value::String(direction.into())))
            .sorter()
    }

    /// Sort by this key ascending
    pub fn order_asc(self) -> Sorter {
        self.order(SORT_ASC)
    }

    /// Sort by this key descending
    pub fn order_desc(self) -> Sorter {
        self.order(SORT_DESC)
    }
}

impl Sorter {
    /// Direction token of an `Order`, as given
    ///
    /// `None` for composites and for payloads that are not a string.
    pub fn direction(&self) -> Option<&str> {
        self.value().as_scalar().and_then(Value::as_str)
    }
}

/// Sort by `key` in `direction`
pub fn order(k: impl Into<String>, direction: impl Into<String>) -> Sorter {
    key(k).order(direction)
}

/// Sort by `key` ascending
pub fn order_asc(k: impl Into<String>) -> Sorter {
    key(k).order_asc()
}

/// Sort by `key` descending
pub fn order_desc(k: impl Into<String>) -> Sorter {
    key(k).order_desc()
}

/// Sort by several keys, in the given priority order
///
/// A single sorter is returned as is.
pub fn orders(sorters: impl IntoIterator<Item = Sorter>) -> Sorter {
    let mut sorters: Vec<Sorter> = sorters.into_iter().collect();
    if sorters.len() == 1 {
        return sorters.remove(0);
    }
    Op::new(ORDERS, "", Payload::Sorters(sorters)).sorter()
}
