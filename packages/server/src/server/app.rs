//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::complexes::commands::MAX_UPLOAD_BYTES;
use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{api_routes, health_handler};

/// Largest accepted request body. Gallery images travel base64-encoded inside
/// the JSON body, so this leaves room for three images at the per-file cap.
pub const MAX_REQUEST_BYTES: usize = 3 * MAX_UPLOAD_BYTES * 4 / 3 + 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// CORS for the configured origins; an empty list allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let jwt_service = deps.jwt_service.clone();

    let app_state = AppState {
        db_pool: deps.db_pool.clone(),
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
