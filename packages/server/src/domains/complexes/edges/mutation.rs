use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::common::{ComplexId, DocumentId, NewsId};
use crate::domains::complexes::actions;
use crate::domains::complexes::commands::{
    ComplexPayload, CreateComplexCommand, CreateDocumentPayload, CreateNewsPayload,
    UpdateComplexCommand, UpdateMode,
};
use crate::domains::complexes::data::{DocumentData, NewsData, ResidentialComplexData};
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::AppState;

/// `POST /api/complexes`
pub async fn create_complex(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<ComplexPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ResidentialComplexData>)> {
    let Json(payload) = payload?;
    let command = CreateComplexCommand::from_payload(payload)?;
    let complex = actions::create_complex(user.user_id, command, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(complex)))
}

/// `PUT /api/complexes/:id`
pub async fn replace_complex(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    complex_id: Result<Path<ComplexId>, PathRejection>,
    payload: Result<Json<ComplexPayload>, JsonRejection>,
) -> ApiResult<Json<ResidentialComplexData>> {
    update(state, user, complex_id, payload, UpdateMode::Replace).await
}

/// `PATCH /api/complexes/:id`
pub async fn patch_complex(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    complex_id: Result<Path<ComplexId>, PathRejection>,
    payload: Result<Json<ComplexPayload>, JsonRejection>,
) -> ApiResult<Json<ResidentialComplexData>> {
    update(state, user, complex_id, payload, UpdateMode::Partial).await
}

async fn update(
    state: AppState,
    user: AuthUser,
    complex_id: Result<Path<ComplexId>, PathRejection>,
    payload: Result<Json<ComplexPayload>, JsonRejection>,
    mode: UpdateMode,
) -> ApiResult<Json<ResidentialComplexData>> {
    let Path(complex_id) = complex_id?;
    let Json(payload) = payload?;

    info!(complex_id = %complex_id, mode = ?mode, "Complex update requested");

    let command = UpdateComplexCommand::from_payload(complex_id, payload, mode)?;
    let complex = actions::update_complex(user.user_id, command, &state.deps).await?;
    Ok(Json(complex))
}

/// `POST /api/complex-news`
pub async fn create_news(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateNewsPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NewsData>)> {
    let Json(payload) = payload?;
    let news = actions::create_news(user.user_id, payload, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// `DELETE /api/complex-news/:id`
pub async fn delete_news(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    news_id: Result<Path<NewsId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(news_id) = news_id?;
    actions::delete_news(user.user_id, news_id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/complex-documents`
pub async fn create_document(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateDocumentPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DocumentData>)> {
    let Json(payload) = payload?;
    let document = actions::create_document(user.user_id, payload, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// `DELETE /api/complex-documents/:id`
pub async fn delete_document(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    document_id: Result<Path<DocumentId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(document_id) = document_id?;
    actions::delete_document(user.user_id, document_id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
