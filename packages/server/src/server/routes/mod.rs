// HTTP routes
pub mod health;

pub use health::*;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::domains::complexes::edges::{mutation, query};

/// Routes mounted under `/api`
pub fn api_routes() -> Router {
    Router::new()
        .route("/complexes", post(mutation::create_complex))
        .route("/complexes/mine", get(query::get_my_complex))
        .route(
            "/complexes/:id",
            get(query::get_complex)
                .put(mutation::replace_complex)
                .patch(mutation::patch_complex),
        )
        .route("/complexes/:id/gallery", get(query::get_gallery))
        .route("/complex-news", post(mutation::create_news))
        .route("/complex-news/:id", delete(mutation::delete_news))
        .route("/complex-documents", post(mutation::create_document))
        .route("/complex-documents/:id", delete(mutation::delete_document))
}
