//! Domain-level error types.

use thiserror::Error;

use crate::domain::{CategoryId, PostId};

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Invalid category: no category with id {0}")]
    InvalidCategory(CategoryId),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: PostId) -> Self {
        Self::NotFound {
            entity_type: "post",
            id,
        }
    }

    pub fn category_not_found(id: CategoryId) -> Self {
        Self::NotFound {
            entity_type: "category",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl RepoError {
    /// Lift into a domain error, attributing a missing row to `entity_type` with `id`.
    pub fn into_domain(self, entity_type: &'static str, id: i64) -> DomainError {
        match self {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            RepoError::Storage(msg) => DomainError::Internal(msg),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
