use fieldguard_core::Shape;
use thiserror::Error;

use crate::field::FieldId;

/// A rejected write.
///
/// Raised synchronously at the point of the invalid write and fatal to that
/// single write: the field keeps its prior value, nothing is retried or
/// deferred.
#[derive(Debug, Error)]
pub enum Violation {
    /// The candidate's runtime shape does not match what the contract
    /// requires.
    #[error("value of '{field}' should be {expected} ({owner})")]
    Type {
        owner: &'static str,
        field: &'static str,
        expected: Shape,
    },
    /// The candidate has the right shape but fails the contract's rule.
    #[error("{message} ({owner})")]
    Constraint {
        owner: &'static str,
        field: &'static str,
        message: String,
    },
}

impl Violation {
    pub fn type_mismatch(id: &FieldId, expected: Shape) -> Self {
        Violation::Type {
            owner: id.owner,
            field: id.field,
            expected,
        }
    }

    pub fn constraint(id: &FieldId, message: impl Into<String>) -> Self {
        Violation::Constraint {
            owner: id.owner,
            field: id.field,
            message: message.into(),
        }
    }
}

/// A structurally invalid contract specification.
///
/// Raised by contract constructors, before any field exists; the
/// specification itself is broken and must be fixed by the caller.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Range bounds that admit no value at all.
    #[error("the segment {segment} is not valid")]
    InvalidSegment { segment: String },
}

impl SpecError {
    pub(crate) fn segment(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        including: bool,
    ) -> Self {
        let (open, close) = if including { ("[", "]") } else { ("(", ")") };
        SpecError::InvalidSegment {
            segment: format!("{open}{from}, {to}{close}"),
        }
    }
}
