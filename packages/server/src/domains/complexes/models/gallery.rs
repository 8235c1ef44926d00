use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgExecutor};

use crate::common::{ComplexId, GalleryImageId};

/// Image in a complex's gallery
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub residential_complex_id: ComplexId,
    pub image_path: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Gallery of a complex in display order (ties broken by upload time).
    pub async fn find_for_complex<'e>(
        complex_id: ComplexId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM complex_gallery_images
            WHERE residential_complex_id = $1
            ORDER BY display_order, created_at, id
            "#,
        )
        .bind(complex_id)
        .fetch_all(executor)
        .await
        .map_err(Into::into)
    }

    /// Lock every gallery row of the complex for the rest of the transaction.
    pub async fn lock_for_complex(
        complex_id: ComplexId,
        conn: &mut PgConnection,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM complex_gallery_images
            WHERE residential_complex_id = $1
            ORDER BY display_order, created_at, id
            FOR UPDATE
            "#,
        )
        .bind(complex_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        complex_id: ComplexId,
        image_path: &str,
        display_order: i32,
        conn: &mut PgConnection,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO complex_gallery_images (id, residential_complex_id, image_path, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(GalleryImageId::new())
        .bind(complex_id)
        .bind(image_path)
        .bind(display_order)
        .fetch_one(&mut *conn)
        .await
        .map_err(Into::into)
    }

    /// Set the display order of an image belonging to `complex_id`.
    ///
    /// Fails when no such image exists for that complex.
    pub async fn update_order(
        complex_id: ComplexId,
        id: GalleryImageId,
        display_order: i32,
        conn: &mut PgConnection,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE complex_gallery_images
            SET display_order = $3
            WHERE id = $1 AND residential_complex_id = $2
            "#,
        )
        .bind(id)
        .bind(complex_id)
        .bind(display_order)
        .execute(&mut *conn)
        .await?;
        if result.rows_affected() != 1 {
            anyhow::bail!("Gallery image {} missing for complex {}", id, complex_id);
        }
        Ok(())
    }

    /// Delete the given images of a complex, returning the stored file paths.
    pub async fn delete_ids(
        complex_id: ComplexId,
        ids: &[GalleryImageId],
        conn: &mut PgConnection,
    ) -> Result<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM complex_gallery_images
            WHERE residential_complex_id = $1 AND id = ANY($2)
            RETURNING image_path
            "#,
        )
        .bind(complex_id)
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(Into::into)
    }
}
