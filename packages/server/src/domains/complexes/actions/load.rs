//! Read-side actions: composite representation and gallery.

use sqlx::PgConnection;

use crate::common::{ComplexId, DomainError, DomainResult, UserId};
use crate::domains::complexes::data::{
    ComplexParts, DocumentData, GalleryImageData, NewsData, ResidentialComplexData,
};
use crate::domains::complexes::models::{
    ComplexBenefits, ComplexDocument, ComplexNews, GalleryImage, RegistrationAndPayment,
    ResidentialComplex,
};
use crate::domains::contacts::SalesContact;
use crate::kernel::{BaseFileStorage, ServerDeps};

fn complex_not_found() -> DomainError {
    DomainError::NotFound("Residential complex".to_string())
}

/// Load the composite representation of a complex.
pub async fn get_complex(
    complex_id: ComplexId,
    deps: &ServerDeps,
) -> DomainResult<ResidentialComplexData> {
    let mut conn = deps.db_pool.acquire().await?;
    load_composite(complex_id, &mut conn, deps.storage.as_ref())
        .await?
        .ok_or_else(complex_not_found)
}

/// The complex owned by the caller.
pub async fn get_my_complex(
    user_id: UserId,
    deps: &ServerDeps,
) -> DomainResult<ResidentialComplexData> {
    let complex = ResidentialComplex::find_by_owner(user_id, &deps.db_pool)
        .await?
        .ok_or_else(complex_not_found)?;
    let mut conn = deps.db_pool.acquire().await?;
    assemble(complex, &mut conn, deps.storage.as_ref()).await
}

/// Gallery of a complex sorted by display order.
pub async fn list_gallery(
    complex_id: ComplexId,
    deps: &ServerDeps,
) -> DomainResult<Vec<GalleryImageData>> {
    if ResidentialComplex::find_owner(complex_id, &deps.db_pool)
        .await?
        .is_none()
    {
        return Err(complex_not_found());
    }
    let images = GalleryImage::find_for_complex(complex_id, &deps.db_pool).await?;
    Ok(gallery_data(images, deps.storage.as_ref()))
}

/// Composite representation read through `conn`; `None` when the complex is missing.
///
/// Inside a transaction this sees the transaction's own uncommitted writes.
pub async fn load_composite(
    complex_id: ComplexId,
    conn: &mut PgConnection,
    storage: &dyn BaseFileStorage,
) -> DomainResult<Option<ResidentialComplexData>> {
    let Some(complex) = ResidentialComplex::find_by_id(complex_id, &mut *conn).await? else {
        return Ok(None);
    };
    assemble(complex, conn, storage).await.map(Some)
}

fn gallery_data(images: Vec<GalleryImage>, storage: &dyn BaseFileStorage) -> Vec<GalleryImageData> {
    images
        .into_iter()
        .map(|image| GalleryImageData::from_model(image, storage))
        .collect()
}

async fn assemble(
    complex: ResidentialComplex,
    conn: &mut PgConnection,
    storage: &dyn BaseFileStorage,
) -> DomainResult<ResidentialComplexData> {
    let complex_id = complex.id;

    let contact = SalesContact::find_for_complex(complex_id, &mut *conn).await?;
    let benefits = ComplexBenefits::find_for_complex(complex_id, &mut *conn).await?;
    let registration = RegistrationAndPayment::find_for_complex(complex_id, &mut *conn).await?;
    let news = ComplexNews::find_for_complex(complex_id, &mut *conn)
        .await?
        .into_iter()
        .map(NewsData::from)
        .collect();
    let documents = ComplexDocument::find_for_complex(complex_id, &mut *conn)
        .await?
        .into_iter()
        .map(|document| DocumentData::from_model(document, storage))
        .collect();
    let gallery = gallery_data(
        GalleryImage::find_for_complex(complex_id, &mut *conn).await?,
        storage,
    );

    Ok(ComplexParts {
        complex,
        contact: contact.into(),
        benefits,
        registration,
        news,
        documents,
        gallery,
    }
    .into())
}
