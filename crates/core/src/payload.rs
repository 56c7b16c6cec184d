//! Operation payloads
//!
//! The `value` field of a descriptor is a closed set of shapes rather than an
//! open "any": a scalar operand, a candidate list, another key, a key/value
//! pair, a page, or a sequence of already-typed children. Whether an
//! operation is composite is therefore a property of its payload type, not a
//! convention over `op`/`key`.

use crate::capability::{Condition, Sorter, Updater};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Payload of an operation descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// No operand (IsNull, Inc, bare keys)
    #[default]
    None,
    /// Single operand (comparisons, arithmetic, Set, sort direction token)
    Scalar(Value),
    /// Ordered operands (In/NotIn candidates, Between `[lower, upper]`)
    List(Vec<Value>),
    /// Another key, for key-to-key comparisons
    Key(String),
    /// Target key bound to an operand, for the `*Key` updaters
    Pair(KeyValue),
    /// Page request
    Page(PageSize),
    /// Children of And/Or
    Conditions(Vec<Condition>),
    /// Children of Batch
    Updaters(Vec<Updater>),
    /// Children of Orders
    Sorters(Vec<Sorter>),
}

impl Payload {
    /// True when the payload holds child operations
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Payload::Conditions(_) | Payload::Updaters(_) | Payload::Sorters(_)
        )
    }

    /// True when there is no operand at all
    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    /// Get the scalar operand
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Payload::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Get the operand list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Payload::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get the other key of a key-to-key comparison
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Payload::Key(k) => Some(k),
            _ => None,
        }
    }

    /// Get the key/value pair
    pub fn as_pair(&self) -> Option<&KeyValue> {
        match self {
            Payload::Pair(kv) => Some(kv),
            _ => None,
        }
    }

    /// Get the page request
    pub fn as_page(&self) -> Option<&PageSize> {
        match self {
            Payload::Page(p) => Some(p),
            _ => None,
        }
    }

    /// Get child conditions
    pub fn as_conditions(&self) -> Option<&[Condition]> {
        match self {
            Payload::Conditions(c) => Some(c),
            _ => None,
        }
    }

    /// Get child updaters
    pub fn as_updaters(&self) -> Option<&[Updater]> {
        match self {
            Payload::Updaters(u) => Some(u),
            _ => None,
        }
    }

    /// Get child sorters
    pub fn as_sorters(&self) -> Option<&[Sorter]> {
        match self {
            Payload::Sorters(s) => Some(s),
            _ => None,
        }
    }

    /// The payload as something that can produce a limit, if it can
    pub fn as_limiter(&self) -> Option<&dyn Limiter> {
        match self {
            Payload::Page(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Scalar(v)
    }
}

impl From<KeyValue> for Payload {
    fn from(kv: KeyValue) -> Self {
        Payload::Pair(kv)
    }
}

impl From<PageSize> for Payload {
    fn from(p: PageSize) -> Self {
        Payload::Page(p)
    }
}

// ============================================================================
// Auxiliary value types
// ============================================================================

/// Key bound to an operand
///
/// Lets one updater target a field other than its own key, e.g. "add to
/// `score` the value under `bonus`". Only the converter interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Key the operand belongs to
    pub key: String,
    /// Operand
    pub value: Value,
}

impl KeyValue {
    /// Create a key/value pair
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Anything that can derive a row limit
pub trait Limiter {
    /// Maximum number of rows
    fn limit(&self) -> i64;
}

/// Page request
///
/// `page` is 1-based. No bounds are checked: zero or negative values are a
/// caller error and are passed through to the converter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSize {
    /// Page number, starting with 1
    pub page: i64,
    /// Page size
    pub size: i64,
}

impl PageSize {
    /// Create a page request
    pub const fn new(page: i64, size: i64) -> Self {
        PageSize { page, size }
    }

    /// Number of rows to skip before this page
    ///
    /// `(page - 1) * size`, saturating at the i64 bounds.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

impl Limiter for PageSize {
    fn limit(&self) -> i64 {
        self.size
    }
}
