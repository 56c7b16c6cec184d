//! Containment checks over operation sequences
//!
//! **Containment is by key only.** `contains(ops, candidate)` is exactly
//! `contains_key(ops, candidate.key())`: the candidate's operation, payload,
//! kind and tags are ignored. `equal("age", 1)` and `greater("age", 99)` are
//! the same operation as far as these helpers are concerned. Compare
//! descriptors with `==` when the whole operation matters.

use crate::capability::Oper;

/// True if any operation targets `key` (exact, case-sensitive match)
pub fn contains_key<O: Oper>(ops: &[O], key: &str) -> bool {
    ops.iter().any(|op| op.key() == key)
}

/// True if any operation targets the candidate's key
///
/// See the module docs: only the key is compared.
pub fn contains<O: Oper, C: Oper + ?Sized>(ops: &[O], candidate: &C) -> bool {
    contains_key(ops, candidate.key())
}

/// First operation targeting `key`
pub fn find_key<'a, O: Oper>(ops: &'a [O], key: &str) -> Option<&'a O> {
    ops.iter().find(|op| op.key() == key)
}
