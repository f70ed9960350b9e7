use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer to the transport boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before any store access.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found")]
    NotFound,

    /// The write would break a uniqueness rule (e.g. a duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store unreachable or query failed.
    #[error("Store error: {0}")]
    Store(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Store(other.to_string()),
        }
    }
}
