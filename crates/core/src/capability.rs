//! Capability markers
//!
//! A descriptor is inert until it is wrapped as one of four capabilities:
//!
//! | Wrapper     | Kind stamped         | Built by |
//! |-------------|----------------------|----------|
//! | `Condition` | `Kind::Condition`    | `condition::*`, `Op::condition()` |
//! | `Updater`   | `Kind::Update`       | `updater::*`, `Op::updater()` |
//! | `Sorter`    | `Kind::Sort`         | `sorter::*`, `Op::sorter()` |
//! | `Paginator` | `Kind::Pagination`   | `paginator::*`, `Op::paginator()` |
//!
//! Wrapping is the only transition (bare -> typed) and it is one-way: a
//! wrapper never hands out `&mut Op`, so its kind cannot be rewritten in
//! place. The one deliberate re-typing path is `into_op()` followed by a
//! conversion (`.condition()`, `.updater()`, ...), which stamps the new kind
//! explicitly.
//!
//! Every other route into a wrapper keeps the stamped kind: `TryFrom<Op>`
//! and deserialization reject a descriptor already typed as something else
//! with [`KindMismatch`]. A bare descriptor is accepted and stamped.
//!
//! `Capability` is sealed: only the four wrappers in this module implement
//! it, so no foreign type can claim to be a `Condition`.

use crate::descriptor::{Kind, Op};
use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

mod sealed {
    pub trait Sealed {}
}

/// Read access to an operation's descriptor
///
/// This is the interface converters and backend builders consume.
pub trait Oper {
    /// The underlying descriptor
    fn as_op(&self) -> &Op;

    /// Operation name
    fn op(&self) -> &str {
        self.as_op().op()
    }

    /// Target key
    fn key(&self) -> &str {
        self.as_op().key()
    }

    /// Payload
    fn value(&self) -> &Payload {
        self.as_op().value()
    }

    /// Capability kind, `None` for a bare descriptor
    fn kind(&self) -> Option<Kind> {
        self.as_op().kind()
    }

    /// Tags
    fn tags(&self) -> &BTreeMap<String, String> {
        self.as_op().tags()
    }
}

impl Oper for Op {
    fn as_op(&self) -> &Op {
        self
    }
}

impl<T: Oper + ?Sized> Oper for &T {
    fn as_op(&self) -> &Op {
        (**self).as_op()
    }
}

impl<T: Oper + ?Sized> Oper for Box<T> {
    fn as_op(&self) -> &Op {
        (**self).as_op()
    }
}

/// A descriptor typed as one capability was offered as another
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation '{op}' is typed as {found}, expected {expected}")]
pub struct KindMismatch {
    /// Operation name of the rejected descriptor
    pub op: String,
    /// Kind the target wrapper stamps
    pub expected: Kind,
    /// Kind already stamped on the descriptor
    pub found: Kind,
}

/// A typed operation
pub trait Capability: Oper + sealed::Sealed + Sized {
    /// Kind stamped on wrapped descriptors
    const KIND: Kind;

    /// Wrap a descriptor, stamping [`Self::KIND`]
    ///
    /// This overwrites any kind already present; it backs the explicit
    /// `.condition()`-style conversions.
    fn from_op(op: Op) -> Self;

    /// Wrap a descriptor unless it is already typed as another capability
    fn try_from_op(op: Op) -> Result<Self, KindMismatch> {
        match op.kind() {
            Some(found) if found != Self::KIND => Err(KindMismatch {
                op: op.op().to_string(),
                expected: Self::KIND,
                found,
            }),
            _ => Ok(Self::from_op(op)),
        }
    }

    /// Unwrap into the descriptor (the kind stays stamped)
    fn into_op(self) -> Op;
}

macro_rules! capability {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $convert:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(try_from = "Op", into = "Op")]
        pub struct $name(Op);

        impl $name {
            /// Unwrap into the descriptor (the kind stays stamped)
            pub fn into_op(self) -> Op {
                self.0
            }
        }

        impl sealed::Sealed for $name {}

        impl Capability for $name {
            const KIND: Kind = $kind;

            fn from_op(op: Op) -> Self {
                $name(op.with_kind($kind))
            }

            fn into_op(self) -> Op {
                self.0
            }
        }

        impl Oper for $name {
            fn as_op(&self) -> &Op {
                &self.0
            }
        }

        impl TryFrom<Op> for $name {
            type Error = KindMismatch;

            fn try_from(op: Op) -> Result<Self, Self::Error> {
                <$name as Capability>::try_from_op(op)
            }
        }

        impl From<$name> for Op {
            fn from(wrapped: $name) -> Self {
                wrapped.0
            }
        }

        impl Op {
            #[doc = concat!("Wrap this descriptor as a `", stringify!($name), "`")]
            pub fn $convert(self) -> $name {
                <$name as Capability>::from_op(self)
            }
        }
    };
}

capability!(
    /// Filter condition
    Condition,
    Kind::Condition,
    condition
);

capability!(
    /// Field update
    Updater,
    Kind::Update,
    updater
);

capability!(
    /// Sort order
    Sorter,
    Kind::Sort,
    sorter
);

capability!(
    /// Page request
    Paginator,
    Kind::Pagination,
    paginator
);

/// Any typed operation, for exhaustive matching over mixed trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Filter condition
    Condition(Condition),
    /// Field update
    Updater(Updater),
    /// Sort order
    Sorter(Sorter),
    /// Page request
    Paginator(Paginator),
}

impl Operation {
    /// Re-type a descriptor from its stamped kind
    ///
    /// Returns `None` for a bare descriptor; there is no kind to restore.
    pub fn from_op(op: Op) -> Option<Self> {
        let operation = match op.kind()? {
            Kind::Condition => Operation::Condition(Condition::from_op(op)),
            Kind::Update => Operation::Updater(Updater::from_op(op)),
            Kind::Sort => Operation::Sorter(Sorter::from_op(op)),
            Kind::Pagination => Operation::Paginator(Paginator::from_op(op)),
        };
        Some(operation)
    }
}

impl Oper for Operation {
    fn as_op(&self) -> &Op {
        match self {
            Operation::Condition(c) => c.as_op(),
            Operation::Updater(u) => u.as_op(),
            Operation::Sorter(s) => s.as_op(),
            Operation::Paginator(p) => p.as_op(),
        }
    }
}

impl From<Condition> for Operation {
    fn from(c: Condition) -> Self {
        Operation::Condition(c)
    }
}

impl From<Updater> for Operation {
    fn from(u: Updater) -> Self {
        Operation::Updater(u)
    }
}

impl From<Sorter> for Operation {
    fn from(s: Sorter) -> Self {
        Operation::Sorter(s)
    }
}

impl From<Paginator> for Operation {
    fn from(p: Paginator) -> Self {
        Operation::Paginator(p)
    }
}
