use thiserror::Error;

use super::auth::AuthError;
use super::validation::FieldErrors;

/// Errors returned by domain actions
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input failed schema or business-rule validation. Nothing was written.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0} not found")]
    NotFound(String),

    /// Caller is not allowed to act on the resource (or is not authenticated)
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        DomainError::Validation(errors)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
