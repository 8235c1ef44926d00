use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{ComplexId, NewsId, UserId};

/// News item published on a complex page
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ComplexNews {
    pub id: NewsId,
    pub residential_complex_id: ComplexId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ComplexNews {
    /// Newest first.
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM complex_news
            WHERE residential_complex_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(complex_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    /// Owner of the complex the news item belongs to.
    pub async fn find_owner(id: NewsId, pool: &PgPool) -> Result<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>(
            r#"
            SELECT c.owner_id
            FROM complex_news n
            JOIN residential_complexes c ON c.id = n.residential_complex_id
            WHERE n.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        title: &str,
        body: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO complex_news (id, residential_complex_id, title, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(NewsId::new())
        .bind(complex_id)
        .bind(title)
        .bind(body)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: NewsId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM complex_news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
