//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: the caller picks a different
/// argument or aborts the user-level command. A failed operation never leaves
/// a partially mutated collection behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was missing or malformed (e.g. a blank name, an unparsable id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Insertion or replacement would make two entities share domain identity.
    #[error("operation would result in duplicate {0}")]
    DuplicateEntity(&'static str),

    /// The targeted entity is not in the collection.
    #[error("{0} not found")]
    EntityNotFound(&'static str),

    /// Mutation attempted through a read-only view.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate(kind: &'static str) -> Self {
        Self::DuplicateEntity(kind)
    }

    pub fn not_found(kind: &'static str) -> Self {
        Self::EntityNotFound(kind)
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }
}
