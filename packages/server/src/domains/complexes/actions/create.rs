use sqlx::PgPool;
use tracing::{info, warn};

use super::files::{remove_files, store_images, StoredImage};
use super::load::load_composite;
use crate::common::{DomainError, DomainResult, UserId};
use crate::domains::complexes::commands::CreateComplexCommand;
use crate::domains::complexes::data::ResidentialComplexData;
use crate::domains::complexes::models::{
    ComplexBenefits, GalleryImage, RegistrationAndPayment, ResidentialComplex,
};
use crate::domains::contacts::SalesContact;
use crate::kernel::{BaseFileStorage, ServerDeps};

fn already_owns_one() -> DomainError {
    DomainError::Conflict("User already owns a residential complex".to_string())
}

fn is_unique_violation(error: &DomainError) -> bool {
    let sqlx_error = match error {
        DomainError::Database(e) => Some(e),
        DomainError::Internal(e) => e.downcast_ref::<sqlx::Error>(),
        _ => None,
    };
    sqlx_error
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}

/// Create a complex owned by `user_id` together with its sub-resources.
///
/// A user owns at most one complex; a second attempt is a conflict.
pub async fn create_complex(
    user_id: UserId,
    command: CreateComplexCommand,
    deps: &ServerDeps,
) -> DomainResult<ResidentialComplexData> {
    if ResidentialComplex::find_by_owner(user_id, &deps.db_pool)
        .await?
        .is_some()
    {
        return Err(already_owns_one());
    }

    info!(user_id = %user_id, name = %command.complex.name, "Creating residential complex");

    let storage = deps.storage.as_ref();
    let stored = store_images(&command.new_images, storage).await?;

    let complex = match persist(user_id, &command, &stored, &deps.db_pool, storage).await {
        Ok(complex) => complex,
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Complex creation rolled back");
            let paths: Vec<String> = stored.into_iter().map(|s| s.path).collect();
            remove_files(&paths, storage).await;
            // concurrent create by the same owner
            if is_unique_violation(&e) {
                return Err(already_owns_one());
            }
            return Err(e);
        }
    };

    info!(complex_id = %complex.id, "Residential complex created");
    Ok(complex)
}

async fn persist(
    user_id: UserId,
    command: &CreateComplexCommand,
    stored: &[StoredImage],
    pool: &PgPool,
    storage: &dyn BaseFileStorage,
) -> DomainResult<ResidentialComplexData> {
    let mut tx = pool.begin().await?;

    let complex = ResidentialComplex::create(user_id, &command.complex, &mut *tx).await?;
    ComplexBenefits::create(complex.id, &command.benefits, &mut *tx).await?;
    RegistrationAndPayment::create(complex.id, &command.registration, &mut *tx).await?;
    SalesContact::create(complex.id, &command.contact, &mut *tx).await?;
    for image in stored {
        GalleryImage::create(complex.id, &image.path, image.order, &mut *tx).await?;
    }

    let created = load_composite(complex.id, &mut *tx, storage)
        .await?
        .ok_or_else(|| DomainError::Internal(anyhow::anyhow!("Created complex vanished")))?;

    tx.commit().await?;
    Ok(created)
}
