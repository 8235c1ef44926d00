use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{ComplexId, DocumentId, UserId};

/// Downloadable document attached to a complex (permits, plans, contracts)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComplexDocument {
    pub id: DocumentId,
    pub residential_complex_id: ComplexId,
    pub name: String,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

impl ComplexDocument {
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM complex_documents
            WHERE residential_complex_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(complex_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    pub async fn find_owner(id: DocumentId, pool: &PgPool) -> Result<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>(
            r#"
            SELECT c.owner_id
            FROM complex_documents d
            JOIN residential_complexes c ON c.id = d.residential_complex_id
            WHERE d.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        name: &str,
        file_path: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO complex_documents (id, residential_complex_id, name, file_path)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(DocumentId::new())
        .bind(complex_id)
        .bind(name)
        .bind(file_path)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete the row and return its stored file path.
    pub async fn delete(id: DocumentId, pool: &PgPool) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "DELETE FROM complex_documents WHERE id = $1 RETURNING file_path",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
