//! Operation descriptor
//!
//! `Op` is the single physical representation of an operation: an operation
//! name, a key, a payload, an optional capability kind and free-form string
//! tags. It is inert until wrapped as a `Condition`, `Updater`, `Sorter` or
//! `Paginator` (see `capability`).
//!
//! ## Mutation Contract
//!
//! Every `with_*` mutator takes the descriptor by value and returns it with
//! exactly one field replaced. A descriptor owns its tags map outright, so a
//! copy never shares tags with the value it was copied from, and
//! `append_tag` can only ever touch the receiver.
//!
//! Generic mutators never change `kind`. Only `with_kind` and the capability
//! conversions write it.

use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Separator inserted by [`Op::scope`]
pub const SEP: &str = ".";

/// Capability category stamped on a descriptor when it is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Filter condition
    Condition,
    /// Field update
    Update,
    /// Sort order
    Sort,
    /// Page request
    Pagination,
}

impl Kind {
    /// Canonical name of the kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Condition => "Condition",
            Kind::Update => "Update",
            Kind::Sort => "Sort",
            Kind::Pagination => "Pagination",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation descriptor
///
/// # Examples
///
/// ```
/// use opkit_core::{key, Payload};
///
/// let op = key("name").scope("user").with_tag("name", "Display Name");
/// assert_eq!(op.key(), "user.name");
/// assert_eq!(op.display_name("name"), "Display Name");
/// assert_eq!(op.value(), &Payload::None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Op {
    op: String,
    key: String,
    #[serde(default)]
    value: Payload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<Kind>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    tags: BTreeMap<String, String>,
}

/// Bare descriptor for a key, with no operation and no payload
///
/// The starting point for the key-bound builders, e.g. `key("age").gt(18)`.
pub fn key(key: impl Into<String>) -> Op {
    Op::new("", key, Payload::None)
}

impl Op {
    /// Create a bare descriptor
    pub fn new(op: impl Into<String>, key: impl Into<String>, value: impl Into<Payload>) -> Self {
        Op {
            op: op.into(),
            key: key.into(),
            value: value.into(),
            kind: None,
            tags: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Operation name
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Target key (empty for composites)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Payload
    pub fn value(&self) -> &Payload {
        &self.value
    }

    /// Capability kind, `None` while bare
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// All tags
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// One tag
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Operation name, key and payload in one call
    pub fn parts(&self) -> (&str, &str, &Payload) {
        (&self.op, &self.key, &self.value)
    }

    /// Display name for the key
    ///
    /// Returns `tags[tag_key]` when present and non-empty, otherwise the key.
    /// Renaming for display never alters the key used for backend lookups.
    pub fn display_name(&self, tag_key: &str) -> &str {
        match self.tags.get(tag_key) {
            Some(name) if !name.is_empty() => name,
            _ => &self.key,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = op.into();
        self
    }

    /// Replace the key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replace the payload
    pub fn with_value(mut self, value: impl Into<Payload>) -> Self {
        self.value = value.into();
        self
    }

    /// Replace the capability kind
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Add or replace one tag
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Replace the whole tags map
    pub fn with_tags<I, K, V>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Add or replace one tag in place
    pub fn append_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Prefix the key with `name` and [`SEP`]
    ///
    /// - empty `name`: unchanged
    /// - empty key: the key becomes exactly `name`
    /// - otherwise: `name.key`
    pub fn scope(mut self, name: &str) -> Self {
        if name.is_empty() {
            return self;
        }
        self.key = if self.key.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", name, SEP, self.key)
        };
        self
    }

    /// Prepend `prefix` to the key, with no separator
    pub fn key_prefix(mut self, prefix: &str) -> Self {
        self.key.insert_str(0, prefix);
        self
    }

    /// Append `suffix` to the key, with no separator
    pub fn key_suffix(mut self, suffix: &str) -> Self {
        self.key.push_str(suffix);
        self
    }
}
