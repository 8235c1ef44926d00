use tracing::{info, warn};
use validator::Validate;

use super::files::{remove_files, DOCUMENTS_FOLDER};
use crate::common::{
    Actor, Capability, DocumentId, DomainError, DomainResult, FieldErrors, UserId,
};
use crate::domains::complexes::commands::{decode_document, CreateDocumentPayload};
use crate::domains::complexes::data::DocumentData;
use crate::domains::complexes::models::ComplexDocument;
use crate::kernel::ServerDeps;

/// Attach a base64-encoded document to a complex the caller owns.
pub async fn create_document(
    user_id: UserId,
    payload: CreateDocumentPayload,
    deps: &ServerDeps,
) -> DomainResult<DocumentData> {
    let mut errors = match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    let decoded = decode_document(&payload.file, &payload.name);
    if let Err(message) = &decoded {
        if errors.get("file").is_none() {
            errors.add("file", message.clone());
        }
    }
    errors.into_result()?;
    let file = decoded.map_err(|message| {
        let mut errors = FieldErrors::new();
        errors.add("file", message);
        errors
    })?;

    let complex_id = payload.residential_complex;
    Actor::new(user_id)
        .can(Capability::ManageComplex(complex_id))
        .check(deps)
        .await?;

    let path = deps
        .storage
        .store(DOCUMENTS_FOLDER, &file.extension, &file.bytes)
        .await?;

    let document =
        match ComplexDocument::create(complex_id, &payload.name, &path, &deps.db_pool).await {
            Ok(document) => document,
            Err(e) => {
                warn!(complex_id = %complex_id, error = %e, "Failed to save document");
                remove_files(&[path], deps.storage.as_ref()).await;
                return Err(e.into());
            }
        };

    info!(complex_id = %complex_id, document_id = %document.id, "Document attached");
    Ok(DocumentData::from_model(document, deps.storage.as_ref()))
}

pub async fn delete_document(
    user_id: UserId,
    document_id: DocumentId,
    deps: &ServerDeps,
) -> DomainResult<()> {
    Actor::new(user_id)
        .can(Capability::ManageDocument(document_id))
        .check(deps)
        .await?;

    let Some(path) = ComplexDocument::delete(document_id, &deps.db_pool).await? else {
        return Err(DomainError::NotFound("Document".to_string()));
    };
    remove_files(&[path], deps.storage.as_ref()).await;

    info!(document_id = %document_id, "Document deleted");
    Ok(())
}
