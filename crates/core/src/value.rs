//! Scalar operands
//!
//! `Value` is what a comparison compares against, what an arithmetic update
//! applies and what a membership test checks. The algebra only carries it;
//! rendering an operand (quoting, casting, placeholders) is the converter's
//! job.
//!
//! Equality is structural and typed: `Int(1)` and `Float(1.0)` are different
//! operands, as are `Bytes(b"a")` and `String("a")`. Floats compare as IEEE-754
//! (`NaN` matches nothing, `-0.0 == 0.0`), so a condition built from `NaN`
//! never equals another one.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar operand of an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL-style null
    Null,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// IEEE-754 double
    Float(f64),
    /// Text
    String(String),
    /// Binary blob
    Bytes(Vec<u8>),
    /// A whole array stored as one operand, e.g. `set("tags", vec![..])`
    Array(Vec<Value>),
}

impl Value {
    /// Text operand, if this is one
    ///
    /// Sort direction tokens and truncation transforms read strings this way.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Operand as a converter would print it: `123`, `false`, `abc`, `[1, 2]`,
/// `NULL`. Bytes print as base64.
///
/// Strings are written unquoted; quoting and escaping belong to the backend.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) => f.write_str(&BASE64.encode(b)),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(Value::to_string).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

// ============================================================================
// Operand conversions
// ============================================================================

macro_rules! value_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )*
    };
}

value_from! {
    &str => |s| Value::String(s.to_string()),
    String => |s| Value::String(s),
    &String => |s| Value::String(s.clone()),
    bool => |b| Value::Bool(b),
    i64 => |i| Value::Int(i),
    i32 => |i| Value::Int(i64::from(i)),
    u32 => |i| Value::Int(i64::from(i)),
    f64 => |x| Value::Float(x),
    f32 => |x| Value::Float(f64::from(x)),
    Vec<u8> => |b| Value::Bytes(b),
    &[u8] => |b| Value::Bytes(b.to_vec()),
    Vec<Value> => |items| Value::Array(items),
    () => |_u| Value::Null,
}

/// `None` is a null operand, so optional filters can be written inline
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// JSON operands
// ============================================================================

/// Operands decoded from JSON filter messages
///
/// Integers that fit `i64` stay `Int`; other numbers become `Float`. A JSON
/// object has no operand meaning and is kept as its JSON text.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .unwrap_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN))),
            Json::String(s) => Value::String(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect::<Vec<_>>().into(),
            object @ Json::Object(_) => Value::String(object.to_string()),
        }
    }
}

/// Operands encoded for JSON-speaking backends
///
/// Bytes become standard base64 text; non-finite floats become `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(i) => Json::from(i),
            Value::Float(x) => serde_json::Number::from_f64(x).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Bytes(b) => Json::String(BASE64.encode(b)),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
        }
    }
}
