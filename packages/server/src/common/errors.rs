use thiserror::Error;

use super::types::EntityKind;

/// Rejections raised by the integrity layer and the store.
///
/// Every mutation either applies completely or fails with one of these before
/// anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An id supplied for the target of an operation is malformed.
    #[error("Invalid {kind} id - {id}")]
    InvalidId { kind: EntityKind, id: String },

    /// A foreign id in a payload does not resolve to an existing entity.
    #[error("Invalid {kind} id - {id}: no such {kind}")]
    InvalidReference { kind: EntityKind, id: String },

    /// A uniqueness rule would be violated.
    #[error("{0}")]
    Conflict(String),

    #[error("{} with id {} not found", .kind.title(), .id)]
    NotFound { kind: EntityKind, id: String },

    /// The operation is not valid for the current state.
    #[error("{0}")]
    PreconditionFailed(String),
}

impl DomainError {
    pub fn invalid_id(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::InvalidId {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid_reference(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::InvalidReference {
            kind,
            id: id.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Stable machine-readable code, exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidId { .. } => "INVALID_ID",
            DomainError::InvalidReference { .. } => "INVALID_REFERENCE",
            DomainError::Conflict(_) => "CONFLICT",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::PreconditionFailed(_) => "PRECONDITION_FAILED",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
