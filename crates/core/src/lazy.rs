//! Lazy descriptor transforms
//!
//! A [`Lazy`] is a shared `Op -> Op` function that callers attach to a field
//! definition and apply right before an operation is built, e.g. to clamp a
//! user-supplied string to the column width.

use crate::descriptor::Op;
use crate::payload::Payload;
use crate::value::Value;
use std::sync::Arc;

/// Shared descriptor transform
pub type Lazy = Arc<dyn Fn(Op) -> Op + Send + Sync>;

impl Op {
    /// Apply a lazy transform
    pub fn map(self, lazy: &Lazy) -> Op {
        lazy(self)
    }
}

/// Truncate a string operand to at most `n` bytes
///
/// Never splits a UTF-8 character: the cut moves back to the previous char
/// boundary. Non-string payloads pass through.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn str_bytes_len(n: usize) -> Lazy {
    assert!(n > 0, "str_bytes_len: n must be positive");
    Arc::new(move |op: Op| {
        truncate_with(op, |s| {
            if s.len() <= n {
                return None;
            }
            let mut end = n;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            Some(end)
        })
    })
}

/// Truncate a string operand to at most `n` characters
///
/// Non-string payloads pass through.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn str_chars_len(n: usize) -> Lazy {
    assert!(n > 0, "str_chars_len: n must be positive");
    Arc::new(move |op: Op| {
        truncate_with(op, |s| {
            if s.len() <= n {
                return None;
            }
            s.char_indices().nth(n).map(|(i, _)| i)
        })
    })
}

fn truncate_with(op: Op, cut: impl Fn(&str) -> Option<usize>) -> Op {
    let truncated = match op.value() {
        Payload::Scalar(Value::String(s)) => cut(s).map(|end| s[..end].to_string()),
        _ => None,
    };
    match truncated {
        Some(s) => op.with_value(Value::String(s)),
        None => op,
    }
}
