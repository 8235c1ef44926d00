use thiserror::Error;

/// Authorization errors raised before a domain action runs
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
