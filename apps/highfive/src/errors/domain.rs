//! Domain-level error type shared by the card model and the transitions.
//!
//! Every failure is either a validation error (the caller handed in input the
//! rules do not allow) or an invariant error (the state reached a shape the
//! transitions should never produce). Drivers use the class to decide whether
//! to re-ask a player or abandon the match.

use thiserror::Error;

/// Validation error kinds for input-contract failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    SelectionCount,
    DuplicateSelection,
    OptionNotOffered,
    IndexOutOfRange,
    InvalidDiscard,
    ParseCard,
    ParseSeat,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input violates the request contract or a rule of play
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// Internal consistency failure
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            Self::Invariant(_) => None,
        }
    }
}
