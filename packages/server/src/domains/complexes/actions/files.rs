//! Storage side effects around database transactions.
//!
//! Uploads are written before the transaction opens so no file IO happens
//! while row locks are held. When the transaction fails the fresh files are
//! discarded; files of rows deleted by a committed transaction are removed
//! afterwards.

use tracing::warn;

use crate::common::{DomainError, DomainResult};
use crate::domains::complexes::commands::NewGalleryImage;
use crate::kernel::BaseFileStorage;

pub const GALLERY_FOLDER: &str = "gallery";
pub const DOCUMENTS_FOLDER: &str = "documents";

/// Stored gallery upload waiting for its database row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: String,
    pub order: i32,
}

/// Write every new image, undoing partial progress on failure.
pub async fn store_images(
    images: &[NewGalleryImage],
    storage: &dyn BaseFileStorage,
) -> DomainResult<Vec<StoredImage>> {
    let mut stored = Vec::with_capacity(images.len());
    for image in images {
        match storage
            .store(GALLERY_FOLDER, &image.file.extension, &image.file.bytes)
            .await
        {
            Ok(path) => stored.push(StoredImage {
                path,
                order: image.order,
            }),
            Err(e) => {
                let paths: Vec<String> = stored.into_iter().map(|s| s.path).collect();
                remove_files(&paths, storage).await;
                return Err(DomainError::Internal(e.context("Failed to store gallery image")));
            }
        }
    }
    Ok(stored)
}

/// Best-effort removal; failures are logged and otherwise ignored.
pub async fn remove_files(paths: &[String], storage: &dyn BaseFileStorage) {
    for path in paths {
        if let Err(e) = storage.remove(path).await {
            warn!(path = %path, error = %e, "Failed to remove stored file");
        }
    }
}
