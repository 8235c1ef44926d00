use crate::common::UserId;
use crate::domains::auth::JwtService;
use crate::server::error::ApiError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Authenticated user information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub email: String,
}

/// JWT authentication middleware
///
/// Extracts JWT token from Authorization header, verifies it, and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!(user_id = %user.user_id, "Authenticated user");
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Extract token (handle both "Bearer <token>" and raw token)
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        user_id: UserId::from_uuid(claims.user_id),
        email: claims.email,
    })
}

/// Handlers that take `AuthUser` reject anonymous requests with 401.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(ApiError::unauthorized)
    }
}
