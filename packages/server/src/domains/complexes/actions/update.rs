//! Composite update of a residential complex.
//!
//! One request updates the complex, its three one-to-one sub-resources and
//! its gallery inside a single transaction holding the complex row lock:
//!
//! 1. sub-resource patches, addressed by the owning complex
//! 2. gallery reconciliation (reorder kept images, delete the rest)
//! 3. new gallery images
//! 4. complex fields and `updated_at`
//!
//! The response is read back through the same transaction before commit, so
//! it shows exactly what this update wrote.

use sqlx::PgPool;
use tracing::{info, warn};

use super::files::{remove_files, store_images, StoredImage};
use super::gallery::plan_reconciliation;
use super::load::load_composite;
use crate::common::{Actor, Capability, DomainError, DomainResult, GalleryImageId, UserId};
use crate::domains::complexes::commands::UpdateComplexCommand;
use crate::domains::complexes::data::ResidentialComplexData;
use crate::domains::complexes::models::{
    ComplexBenefits, GalleryImage, RegistrationAndPayment, ResidentialComplex,
};
use crate::domains::contacts::SalesContact;
use crate::kernel::{BaseFileStorage, ServerDeps};

/// Apply a validated update on behalf of `user_id` and return the updated complex.
pub async fn update_complex(
    user_id: UserId,
    command: UpdateComplexCommand,
    deps: &ServerDeps,
) -> DomainResult<ResidentialComplexData> {
    let complex_id = command.complex_id;

    Actor::new(user_id)
        .can(Capability::ManageComplex(complex_id))
        .check(deps)
        .await?;

    info!(
        complex_id = %complex_id,
        user_id = %user_id,
        prunes_gallery = command.prunes_gallery(),
        kept_images = command.images_order.len(),
        new_images = command.new_images.len(),
        "Updating residential complex"
    );

    let storage = deps.storage.as_ref();
    let stored = store_images(&command.new_images, storage).await?;

    let (complex, removed_paths) = match persist(&command, &stored, &deps.db_pool, storage).await {
        Ok(updated) => updated,
        Err(e) => {
            warn!(complex_id = %complex_id, error = %e, "Complex update rolled back");
            let paths: Vec<String> = stored.into_iter().map(|s| s.path).collect();
            remove_files(&paths, storage).await;
            return Err(e);
        }
    };

    remove_files(&removed_paths, storage).await;

    info!(
        complex_id = %complex_id,
        deleted_images = removed_paths.len(),
        "Residential complex updated"
    );

    Ok(complex)
}

/// Run the transactional part of the update. Returns the updated composite and
/// the file paths of deleted gallery images.
async fn persist(
    command: &UpdateComplexCommand,
    stored: &[StoredImage],
    pool: &PgPool,
    storage: &dyn BaseFileStorage,
) -> DomainResult<(ResidentialComplexData, Vec<String>)> {
    let complex_id = command.complex_id;
    let mut tx = pool.begin().await?;

    if ResidentialComplex::lock_for_update(complex_id, &mut *tx)
        .await?
        .is_none()
    {
        return Err(DomainError::NotFound("Residential complex".to_string()));
    }

    ComplexBenefits::apply_patch(complex_id, &command.benefits, &mut *tx).await?;
    RegistrationAndPayment::apply_patch(complex_id, &command.registration, &mut *tx).await?;
    SalesContact::apply_patch(complex_id, &command.contact, &mut *tx).await?;

    let existing: Vec<GalleryImageId> = GalleryImage::lock_for_complex(complex_id, &mut *tx)
        .await?
        .into_iter()
        .map(|image| image.id)
        .collect();
    let plan = plan_reconciliation(&existing, &command.images_order);
    if let Some(unknown) = plan.unknown.first() {
        // dropping `tx` rolls back
        return Err(DomainError::NotFound(format!("Gallery image {}", unknown)));
    }

    for (image_id, order) in &plan.reorder {
        GalleryImage::update_order(complex_id, *image_id, *order, &mut *tx).await?;
    }
    let removed_paths = GalleryImage::delete_ids(complex_id, &plan.delete, &mut *tx).await?;

    for image in stored {
        GalleryImage::create(complex_id, &image.path, image.order, &mut *tx).await?;
    }

    ResidentialComplex::apply_patch(complex_id, &command.complex, &mut *tx).await?;

    let complex = load_composite(complex_id, &mut *tx, storage)
        .await?
        .ok_or_else(|| DomainError::NotFound("Residential complex".to_string()))?;

    tx.commit().await?;
    Ok((complex, removed_paths))
}
