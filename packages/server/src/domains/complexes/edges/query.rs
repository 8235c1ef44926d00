use axum::extract::rejection::PathRejection;
use axum::extract::{Extension, Path};
use axum::Json;

use crate::common::ComplexId;
use crate::domains::complexes::actions;
use crate::domains::complexes::data::{GalleryImageData, ResidentialComplexData};
use crate::server::error::ApiResult;
use crate::server::middleware::AuthUser;
use crate::server::AppState;

/// `GET /api/complexes/:id`
pub async fn get_complex(
    Extension(state): Extension<AppState>,
    complex_id: Result<Path<ComplexId>, PathRejection>,
) -> ApiResult<Json<ResidentialComplexData>> {
    let Path(complex_id) = complex_id?;
    let complex = actions::get_complex(complex_id, &state.deps).await?;
    Ok(Json(complex))
}

/// `GET /api/complexes/mine`
pub async fn get_my_complex(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ResidentialComplexData>> {
    let complex = actions::get_my_complex(user.user_id, &state.deps).await?;
    Ok(Json(complex))
}

/// `GET /api/complexes/:id/gallery`
pub async fn get_gallery(
    Extension(state): Extension<AppState>,
    complex_id: Result<Path<ComplexId>, PathRejection>,
) -> ApiResult<Json<Vec<GalleryImageData>>> {
    let Path(complex_id) = complex_id?;
    let gallery = actions::list_gallery(complex_id, &state.deps).await?;
    Ok(Json(gallery))
}
