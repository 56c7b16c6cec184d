//! Updater constructors
//!
//! `Inc`/`Dec` carry no payload; `Add`/`Sub`/`Mul`/`Div`/`Set` carry a
//! scalar operand. The `*_key` variants carry a [`KeyValue`] so one updater
//! can record "add to `score` the value of `bonus`"; only the converter
//! gives that pair meaning.

use crate::capability::Updater;
use crate::descriptor::{key, Op};
use crate::payload::{KeyValue, Payload};
use crate::value::Value;

/// Several updaters applied together
pub const BATCH: &str = "Batch";
/// `key = value`
pub const SET: &str = "Set";
/// `key = key + 1`
pub const INC: &str = "Inc";
/// `key = key - 1`
pub const DEC: &str = "Dec";
/// `key = key + value`
pub const ADD: &str = "Add";
/// `key = key - value`
pub const SUB: &str = "Sub";
/// `key = key * value`
pub const MUL: &str = "Mul";
/// `key = key / value`
pub const DIV: &str = "Div";

#[allow(clippy::should_implement_trait)]
impl Op {
    fn update(self, op: &str, value: Payload) -> Updater {
        self.with_op(op).with_value(value).updater()
    }

    /// Increment this key by one
    pub fn inc(self) -> Updater {
        self.update(INC, Payload::None)
    }

    /// Decrement this key by one
    pub fn dec(self) -> Updater {
        self.update(DEC, Payload::None)
    }

    /// Add `value` to this key
    pub fn add(self, value: impl Into<Value>) -> Updater {
        self.update(ADD, Payload::Scalar(value.into()))
    }

    /// Subtract `value` from this key
    pub fn sub(self, value: impl Into<Value>) -> Updater {
        self.update(SUB, Payload::Scalar(value.into()))
    }

    /// Multiply this key by `value`
    pub fn mul(self, value: impl Into<Value>) -> Updater {
        self.update(MUL, Payload::Scalar(value.into()))
    }

    /// Divide this key by `value`
    pub fn div(self, value: impl Into<Value>) -> Updater {
        self.update(DIV, Payload::Scalar(value.into()))
    }

    /// Assign `value` to this key
    pub fn set(self, value: impl Into<Value>) -> Updater {
        self.update(SET, Payload::Scalar(value.into()))
    }

    /// `Add` with the operand bound to `other`
    pub fn add_key(self, other: impl Into<String>, value: impl Into<Value>) -> Updater {
        self.update(ADD, Payload::Pair(KeyValue::new(other, value)))
    }

    /// `Sub` with the operand bound to `other`
    pub fn sub_key(self, other: impl Into<String>, value: impl Into<Value>) -> Updater {
        self.update(SUB, Payload::Pair(KeyValue::new(other, value)))
    }

    /// `Mul` with the operand bound to `other`
    pub fn mul_key(self, other: impl Into<String>, value: impl Into<Value>) -> Updater {
        self.update(MUL, Payload::Pair(KeyValue::new(other, value)))
    }

    /// `Div` with the operand bound to `other`
    pub fn div_key(self, other: impl Into<String>, value: impl Into<Value>) -> Updater {
        self.update(DIV, Payload::Pair(KeyValue::new(other, value)))
    }
}

/// Increment `key` by one
pub fn inc(k: impl Into<String>) -> Updater {
    key(k).inc()
}

/// Decrement `key` by one
pub fn dec(k: impl Into<String>) -> Updater {
    key(k).dec()
}

/// Add `value` to `key`
pub fn add(k: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).add(value)
}

/// Subtract `value` from `key`
pub fn sub(k: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).sub(value)
}

/// Multiply `key` by `value`
pub fn mul(k: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).mul(value)
}

/// Divide `key` by `value`
pub fn div(k: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).div(value)
}

/// Assign `value` to `key`
pub fn set(k: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).set(value)
}

/// Add to `key` the operand bound to `other`
pub fn add_key(k: impl Into<String>, other: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).add_key(other, value)
}

/// Subtract from `key` the operand bound to `other`
pub fn sub_key(k: impl Into<String>, other: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).sub_key(other, value)
}

/// Multiply `key` by the operand bound to `other`
pub fn mul_key(k: impl Into<String>, other: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).mul_key(other, value)
}

/// Divide `key` by the operand bound to `other`
pub fn div_key(k: impl Into<String>, other: impl Into<String>, value: impl Into<Value>) -> Updater {
    key(k).div_key(other, value)
}

/// Combine updaters
///
/// - none: `None`, meaning there is nothing to apply (not an error)
/// - one: that updater, unwrapped
/// - several: a `Batch` whose children keep their input order
///
/// ```
/// use opkit_core::updater::{batch, inc, set};
///
/// assert!(batch(Vec::new()).is_none());
/// assert_eq!(batch([inc("hits")]), Some(inc("hits")));
/// assert!(batch([inc("hits"), set("name", "x")]).is_some());
/// ```
pub fn batch(updaters: impl IntoIterator<Item = Updater>) -> Option<Updater> {
    let mut updaters: Vec<Updater> = updaters.into_iter().collect();
    match updaters.len() {
        0 => None,
        1 => updaters.pop(),
        _ => Some(Op::new(BATCH, "", Payload::Updaters(updaters)).updater()),
    }
}
