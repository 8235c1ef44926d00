use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Directory holding uploaded gallery images and documents
    pub media_root: String,
    /// URL prefix the media directory is served under
    pub media_url: String,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "housing-api".to_string()),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string()),
            media_url: normalize_prefix(
                &env::var("MEDIA_URL").unwrap_or_else(|_| "/media".to_string()),
            ),
            allowed_origins: parse_list(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
        })
    }
}

/// Split a comma-separated list, dropping blanks
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// `media/` and `/media/` both become `/media`
fn normalize_prefix(raw: &str) -> String {
    format!("/{}", raw.trim().trim_matches('/'))
}
