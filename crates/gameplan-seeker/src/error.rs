//! Error types for the seeker crate.

use thiserror::Error;

use crate::op::Op;

/// Errors that can occur when parsing queries, sorting, or resolving selectors.
///
/// Every variant is recoverable and local to the call that produced it;
/// no state is modified when one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeekerError {
    /// Clause does not match `<field> <operator> <value>`.
    #[error("invalid clause '{clause}': {reason}")]
    Syntax {
        clause: String,
        reason: &'static str,
    },

    /// Field or sort column is not known to the registry.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Operand cannot be converted to the field's value kind.
    #[error("field '{field}' expects {expected} value, got '{value}'")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// Operator is not valid for the field's value kind.
    #[error("operator '{op}' is not valid for {kind} field '{field}'")]
    UnsupportedOperator {
        op: Op,
        field: &'static str,
        kind: &'static str,
    },

    /// Malformed numeric range or index selector.
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

impl SeekerError {
    pub(crate) fn syntax(clause: &str, reason: &'static str) -> Self {
        SeekerError::Syntax {
            clause: clause.to_string(),
            reason,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
