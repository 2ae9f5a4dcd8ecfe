//! Value-level failures.
//!
//! These are raised only by operations that insist on a particular value
//! *shape*; numeric coercion itself never fails loudly (it answers `None`).

use std::{error::Error, fmt};

use crate::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A compound value with more than one element was asked to act as a scalar.
    ImplicitScalar { len: usize },
    /// An operation expected one kind of value and received another.
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::ImplicitScalar { len } => {
                write!(f, "cannot treat a {len}-element array as a single value")
            }
            ValueError::KindMismatch { expected, found } => {
                write!(f, "expected {expected} rather than {found}")
            }
        }
    }
}

impl Error for ValueError {}
