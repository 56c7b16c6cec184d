//! Condition constructors
//!
//! Every constructor exists twice: as a free function taking the key, and as
//! a key-bound method on [`Op`] (`key("age").gt(18)`). The free functions are
//! defined in terms of the methods, so the two forms cannot drift apart. The
//! key-bound form keeps the receiver's tags.
//!
//! ## Payload Shapes
//!
//! | Family                        | Payload |
//! |-------------------------------|---------|
//! | Equal, Less, Like, ...        | `Scalar(operand)` |
//! | In, NotIn                     | `List(candidates)` |
//! | Between, NotBetween           | `List([lower, upper])`, bounds unchecked |
//! | IsNull, IsNotNull             | `None` |
//! | EqualKey, LessKey, ...        | `Key(other_key)` |
//! | And, Or                       | `Conditions(children)`, empty key |

use crate::capability::Condition;
use crate::descriptor::{key, Op};
use crate::payload::Payload;
use crate::value::Value;

// ============================================================================
// Operation names
// ============================================================================

/// `key = value`
pub const EQUAL: &str = "Equal";
/// `key != value`
pub const NOT_EQUAL: &str = "NotEqual";
/// `key < value`
pub const LESS: &str = "Less";
/// `key <= value`
pub const LESS_EQUAL: &str = "LessEqual";
/// `key > value`
pub const GREATER: &str = "Greater";
/// `key >= value`
pub const GREATER_EQUAL: &str = "GreaterEqual";
/// `key IN (values)`
pub const IN: &str = "In";
/// `key NOT IN (values)`
pub const NOT_IN: &str = "NotIn";
/// `key IS NULL`
pub const IS_NULL: &str = "IsNull";
/// `key IS NOT NULL`
pub const IS_NOT_NULL: &str = "IsNotNull";
/// `key LIKE pattern`
pub const LIKE: &str = "Like";
/// `key NOT LIKE pattern`
pub const NOT_LIKE: &str = "NotLike";
/// `key BETWEEN lower AND upper`
pub const BETWEEN: &str = "Between";
/// `key NOT BETWEEN lower AND upper`
pub const NOT_BETWEEN: &str = "NotBetween";

/// `key1 = key2`
pub const EQUAL_KEY: &str = "EqualKey";
/// `key1 != key2`
pub const NOT_EQUAL_KEY: &str = "NotEqualKey";
/// `key1 < key2`
pub const LESS_KEY: &str = "LessKey";
/// `key1 <= key2`
pub const LESS_EQUAL_KEY: &str = "LessEqualKey";
/// `key1 > key2`
pub const GREATER_KEY: &str = "GreaterKey";
/// `key1 >= key2`
pub const GREATER_EQUAL_KEY: &str = "GreaterEqualKey";

/// Conjunction of child conditions
pub const AND: &str = "And";
/// Disjunction of child conditions
pub const OR: &str = "Or";

// ============================================================================
// Key-bound builders
// ============================================================================

#[allow(clippy::should_implement_trait)]
impl Op {
    fn compare(self, op: &str, value: Payload) -> Condition {
        self.with_op(op).with_value(value).condition()
    }

    /// `Equal` against this key
    pub fn equal(self, value: impl Into<Value>) -> Condition {
        self.compare(EQUAL, Payload::Scalar(value.into()))
    }

    /// `NotEqual` against this key
    pub fn not_equal(self, value: impl Into<Value>) -> Condition {
        self.compare(NOT_EQUAL, Payload::Scalar(value.into()))
    }

    /// `Less` against this key
    pub fn less(self, value: impl Into<Value>) -> Condition {
        self.compare(LESS, Payload::Scalar(value.into()))
    }

    /// `LessEqual` against this key
    pub fn less_equal(self, value: impl Into<Value>) -> Condition {
        self.compare(LESS_EQUAL, Payload::Scalar(value.into()))
    }

    /// `Greater` against this key
    pub fn greater(self, value: impl Into<Value>) -> Condition {
        self.compare(GREATER, Payload::Scalar(value.into()))
    }

    /// `GreaterEqual` against this key
    pub fn greater_equal(self, value: impl Into<Value>) -> Condition {
        self.compare(GREATER_EQUAL, Payload::Scalar(value.into()))
    }

    /// `Like` against this key
    pub fn like(self, pattern: impl Into<String>) -> Condition {
        self.compare(LIKE, Payload::Scalar(Value::String(pattern.into())))
    }

    /// `NotLike` against this key
    pub fn not_like(self, pattern: impl Into<String>) -> Condition {
        self.compare(NOT_LIKE, Payload::Scalar(Value::String(pattern.into())))
    }

    /// `In` against this key
    ///
    /// Accepts an array literal or any other iterable; zero candidates is legal.
    pub fn is_in<I, V>(self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.compare(IN, Payload::List(values.into_iter().map(Into::into).collect()))
    }

    /// `NotIn` against this key
    pub fn not_in<I, V>(self, values: I) -> Condition
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.compare(
            NOT_IN,
            Payload::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// `IsNull` on this key
    pub fn is_null(self) -> Condition {
        self.compare(IS_NULL, Payload::None)
    }

    /// `IsNotNull` on this key
    pub fn is_not_null(self) -> Condition {
        self.compare(IS_NOT_NULL, Payload::None)
    }

    /// `Between` on this key; `lower <= upper` is not checked
    pub fn between(self, lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
        self.compare(BETWEEN, Payload::List(vec![lower.into(), upper.into()]))
    }

    /// `NotBetween` on this key; `lower <= upper` is not checked
    pub fn not_between(self, lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
        self.compare(NOT_BETWEEN, Payload::List(vec![lower.into(), upper.into()]))
    }

    /// Short for [`Op::equal`]
    pub fn eq(self, value: impl Into<Value>) -> Condition {
        self.equal(value)
    }

    /// Short for [`Op::not_equal`]
    pub fn not_eq(self, value: impl Into<Value>) -> Condition {
        self.not_equal(value)
    }

    /// Short for [`Op::less`]
    pub fn le(self, value: impl Into<Value>) -> Condition {
        self.less(value)
    }

    /// Short for [`Op::less_equal`]
    pub fn le_eq(self, value: impl Into<Value>) -> Condition {
        self.less_equal(value)
    }

    /// Short for [`Op::greater`]
    pub fn gt(self, value: impl Into<Value>) -> Condition {
        self.greater(value)
    }

    /// Short for [`Op::greater_equal`]
    pub fn gt_eq(self, value: impl Into<Value>) -> Condition {
        self.greater_equal(value)
    }

    /// `EqualKey`: this key against another key
    pub fn equal_key(self, other: impl Into<String>) -> Condition {
        self.compare(EQUAL_KEY, Payload::Key(other.into()))
    }

    /// `NotEqualKey`: this key against another key
    pub fn not_equal_key(self, other: impl Into<String>) -> Condition {
        self.compare(NOT_EQUAL_KEY, Payload::Key(other.into()))
    }

    /// `LessKey`: this key against another key
    pub fn less_key(self, other: impl Into<String>) -> Condition {
        self.compare(LESS_KEY, Payload::Key(other.into()))
    }

    /// `LessEqualKey`: this key against another key
    pub fn less_equal_key(self, other: impl Into<String>) -> Condition {
        self.compare(LESS_EQUAL_KEY, Payload::Key(other.into()))
    }

    /// `GreaterKey`: this key against another key
    pub fn greater_key(self, other: impl Into<String>) -> Condition {
        self.compare(GREATER_KEY, Payload::Key(other.into()))
    }

    /// `GreaterEqualKey`: this key against another key
    pub fn greater_equal_key(self, other: impl Into<String>) -> Condition {
        self.compare(GREATER_EQUAL_KEY, Payload::Key(other.into()))
    }
}

// ============================================================================
// Free constructors
// ============================================================================

/// `key = value`
pub fn equal(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).equal(value)
}

/// `key != value`
pub fn not_equal(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).not_equal(value)
}

/// `key < value`
pub fn less(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).less(value)
}

/// `key <= value`
pub fn less_equal(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).less_equal(value)
}

/// `key > value`
pub fn greater(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).greater(value)
}

/// `key >= value`
pub fn greater_equal(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    key(k).greater_equal(value)
}

/// `key LIKE pattern`
pub fn like(k: impl Into<String>, pattern: impl Into<String>) -> Condition {
    key(k).like(pattern)
}

/// `key NOT LIKE pattern`
pub fn not_like(k: impl Into<String>, pattern: impl Into<String>) -> Condition {
    key(k).not_like(pattern)
}

/// `key IN (values)`
///
/// ```
/// use opkit_core::condition::is_in;
///
/// // array literal and explicit sequence build the same condition
/// assert_eq!(is_in("id", [1, 2, 3]), is_in("id", vec![1, 2, 3]));
/// ```
pub fn is_in<I, V>(k: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    key(k).is_in(values)
}

/// `key NOT IN (values)`
pub fn not_in<I, V>(k: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    key(k).not_in(values)
}

/// `key IS NULL`
pub fn is_null(k: impl Into<String>) -> Condition {
    key(k).is_null()
}

/// `key IS NOT NULL`
pub fn is_not_null(k: impl Into<String>) -> Condition {
    key(k).is_not_null()
}

/// `key BETWEEN lower AND upper`
pub fn between(k: impl Into<String>, lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
    key(k).between(lower, upper)
}

/// `key NOT BETWEEN lower AND upper`
pub fn not_between(
    k: impl Into<String>,
    lower: impl Into<Value>,
    upper: impl Into<Value>,
) -> Condition {
    key(k).not_between(lower, upper)
}

/// Short for [`equal`]
pub fn eq(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    equal(k, value)
}

/// Short for [`not_equal`]
pub fn not_eq(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    not_equal(k, value)
}

/// Short for [`less`]
pub fn le(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    less(k, value)
}

/// Short for [`less_equal`]
pub fn le_eq(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    less_equal(k, value)
}

/// Short for [`greater`]
pub fn gt(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    greater(k, value)
}

/// Short for [`greater_equal`]
pub fn gt_eq(k: impl Into<String>, value: impl Into<Value>) -> Condition {
    greater_equal(k, value)
}

/// `key1 = key2`
pub fn equal_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).equal_key(key2)
}

/// `key1 != key2`
pub fn not_equal_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).not_equal_key(key2)
}

/// `key1 < key2`
pub fn less_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).less_key(key2)
}

/// `key1 <= key2`
pub fn less_equal_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).less_equal_key(key2)
}

/// `key1 > key2`
pub fn greater_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).greater_key(key2)
}

/// `key1 >= key2`
pub fn greater_equal_key(key1: impl Into<String>, key2: impl Into<String>) -> Condition {
    key(key1).greater_equal_key(key2)
}

/// Conjunction of `conds`
///
/// A single condition is returned as is; an empty input yields an `And`
/// with no children.
pub fn and(conds: impl IntoIterator<Item = Condition>) -> Condition {
    composite(AND, conds)
}

/// Disjunction of `conds`
///
/// A single condition is returned as is; an empty input yields an `Or`
/// with no children.
pub fn or(conds: impl IntoIterator<Item = Condition>) -> Condition {
    composite(OR, conds)
}

fn composite(op: &str, conds: impl IntoIterator<Item = Condition>) -> Condition {
    let mut conds: Vec<Condition> = conds.into_iter().collect();
    if conds.len() == 1 {
        return conds.remove(0);
    }
    Op::new(op, "", Payload::Conditions(conds)).condition()
}
