//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by handlers and
//! domain actions. External services sit behind trait objects so tests can
//! swap them for mocks.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::auth::HasAuthContext;
use crate::common::{ComplexId, DocumentId, NewsId, UserId};
use crate::domains::auth::JwtService;
use crate::domains::complexes::models::{ComplexDocument, ComplexNews, ResidentialComplex};
use crate::kernel::BaseFileStorage;

/// Server dependencies accessible to handlers and actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Storage for uploaded gallery images and documents
    pub storage: Arc<dyn BaseFileStorage>,
    /// JWT service for token creation and verification
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        storage: Arc<dyn BaseFileStorage>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            db_pool,
            storage,
            jwt_service,
        }
    }
}

/// Ownership lookups backed by Postgres
#[async_trait]
impl HasAuthContext for ServerDeps {
    async fn complex_owner(&self, id: ComplexId) -> Result<Option<UserId>> {
        ResidentialComplex::find_owner(id, &self.db_pool).await
    }

    async fn news_owner(&self, id: NewsId) -> Result<Option<UserId>> {
        ComplexNews::find_owner(id, &self.db_pool).await
    }

    async fn document_owner(&self, id: DocumentId) -> Result<Option<UserId>> {
        ComplexDocument::find_owner(id, &self.db_pool).await
    }
}
