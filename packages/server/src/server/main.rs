// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use housing_core::domains::auth::JwtService;
use housing_core::kernel::{LocalFileStorage, ServerDeps};
use housing_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,housing_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting housing API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    tokio::fs::create_dir_all(&config.media_root)
        .await
        .with_context(|| format!("Failed to create media root {}", config.media_root))?;

    let deps = ServerDeps::new(
        pool,
        Arc::new(LocalFileStorage::new(&config.media_root, &config.media_url)),
        Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone())),
    );

    let app = build_app(deps, &config.allowed_origins)
        .nest_service(&config.media_url, ServeDir::new(&config.media_root));

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!(media_root = %config.media_root, media_url = %config.media_url, "Serving uploads");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
