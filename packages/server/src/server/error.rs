//! HTTP error mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::common::{AuthError, DomainError, FieldErrors};
use crate::server::app::MAX_REQUEST_BYTES;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by handlers, rendered as
/// `{"error": {"message", "status", "fields"?}}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: None,
        }
    }

    pub fn validation(fields: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            fields: Some(fields),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication required")
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "message": self.message,
            "status": self.status.as_u16(),
        });
        if let Some(fields) = self.fields {
            error["fields"] = json!(fields);
        }

        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired | AuthError::InvalidToken => Self::unauthorized(),
            AuthError::PermissionDenied(msg) => Self::forbidden(msg),
            AuthError::NotFound(_) => Self::not_found(err.to_string()),
            AuthError::InternalError(e) => {
                error!(error = %e, "Authorization lookup failed");
                Self::internal()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(fields) => Self::validation(fields),
            DomainError::NotFound(_) => Self::not_found(err.to_string()),
            DomainError::Conflict(msg) => Self::conflict(msg),
            DomainError::Auth(auth) => auth.into(),
            DomainError::Database(e) => {
                error!(error = %e, "Database error");
                Self::internal()
            }
            DomainError::Internal(e) => {
                error!(error = ?e, "Internal error");
                Self::internal()
            }
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(fields: FieldErrors) -> Self {
        Self::validation(fields)
    }
}

/// Malformed JSON (syntax, wrong types, unknown enum values) is reported
/// against the `body` path; an oversized body is 413.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected `Content-Type: application/json`",
            ),
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => Self::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "Request body exceeds {} MB",
                    MAX_REQUEST_BYTES / (1024 * 1024)
                ),
            ),
            other => {
                let mut fields = FieldErrors::new();
                fields.add("body", other.body_text());
                Self::validation(fields)
            }
        }
    }
}

/// Unparseable ids in the path name no existing resource
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::not_found(rejection.body_text())
    }
}
