use std::time::{Duration, Instant};

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: DatabaseHealth,
    connection_pool: ConnectionPoolHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct ConnectionPoolHealth {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

/// Health check endpoint
///
/// Pings the database and reports pool utilization. Returns 200 when the
/// database answers, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let ping = tokio::time::timeout(
        DB_PING_TIMEOUT,
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let database = match ping {
        Ok(Ok(_)) => DatabaseHealth {
            status: "ok",
            latency_ms: Some(started.elapsed().as_millis()),
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth {
            status: "error",
            latency_ms: None,
            error: Some(format!("Query failed: {}", e)),
        },
        Err(_) => DatabaseHealth {
            status: "error",
            latency_ms: None,
            error: Some(format!("Query timeout (>{}s)", DB_PING_TIMEOUT.as_secs())),
        },
    };

    let connection_pool = ConnectionPoolHealth {
        size: state.db_pool.size(),
        idle_connections: state.db_pool.num_idle(),
        max_connections: state.db_pool.options().get_max_connections(),
    };

    let (status_code, status) = if database.status == "ok" {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!(error = ?database.error, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            connection_pool,
        }),
    )
}
