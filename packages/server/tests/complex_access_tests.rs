//! Integration tests for complex creation, reads and ownership checks.

mod common;

use crate::common::{add_gallery_image, create_test_complex, full_complex_body, png_base64, snapshot, TestHarness};
use axum::http::StatusCode;
use housing_core::common::{ComplexId, UserId};
use housing_core::kernel::{MockFileStorage, TestDependencies};
use serde_json::json;
use test_context::test_context;

// =============================================================================
// Authentication and ownership
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn update_without_token_is_unauthorized(ctx: &TestHarness) {
    let complex_id = create_test_complex(&ctx.db_pool, UserId::new(), "Anonymous").await.unwrap();

    let (status, response) = ctx
        .api()
        .patch(&format!("/api/complexes/{}", complex_id), None, json!({ "name": "Hijacked" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"]["status"], 401);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_with_invalid_token_is_unauthorized(ctx: &TestHarness) {
    let complex_id = create_test_complex(&ctx.db_pool, UserId::new(), "Bad token").await.unwrap();

    let (status, _) = ctx
        .api()
        .patch(
            &format!("/api/complexes/{}", complex_id),
            Some("not-a-jwt"),
            json!({ "name": "Hijacked" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_owner_update_is_forbidden_and_changes_nothing(ctx: &TestHarness) {
    // Arrange
    let complex_id = create_test_complex(&ctx.db_pool, UserId::new(), "Owned").await.unwrap();
    add_gallery_image(&ctx.db_pool, complex_id, 0).await.unwrap();
    let before = snapshot(&ctx.db_pool, complex_id).await.unwrap();

    // Act
    let mut body = full_complex_body("Hijacked");
    body["images"] = json!([{ "image": png_base64(), "order": 0 }]);
    let (status, _) = ctx
        .api()
        .put(
            &format!("/api/complexes/{}", complex_id),
            Some(&ctx.token_for(UserId::new())),
            body,
        )
        .await;

    // Assert
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(snapshot(&ctx.db_pool, complex_id).await.unwrap(), before);
    assert!(ctx.storage.stored_paths().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_of_missing_complex_is_not_found(ctx: &TestHarness) {
    let (status, response) = ctx
        .api()
        .patch(
            &format!("/api/complexes/{}", ComplexId::new()),
            Some(&ctx.token_for(UserId::new())),
            json!({ "name": "Ghost" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"]["message"], "Residential complex not found");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_complex_id_is_not_found(ctx: &TestHarness) {
    let (status, _) = ctx.api().get("/api/complexes/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Creation
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn create_returns_composite_with_gallery(ctx: &TestHarness) {
    let owner = UserId::new();
    let mut body = full_complex_body("Fresh");
    body["images"] = json!([
        { "image": png_base64(), "order": 1 },
        { "image": png_base64(), "order": 0 }
    ]);

    let (status, response) = ctx
        .api()
        .post("/api/complexes", Some(&ctx.token_for(owner)), body)
        .await;

    assert_eq!(status, StatusCode::CREATED, "{}", response);
    assert_eq!(response["user"], owner.to_string());
    assert_eq!(response["name"], "Fresh");
    assert_eq!(response["benefits"]["parking"], true);
    let gallery = response["gallery_residential_complex"].as_array().unwrap();
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0]["order"], 0);
    assert_eq!(gallery[1]["order"], 1);
    assert_eq!(ctx.storage.stored_paths().len(), 2);
    assert!(response["news"].as_array().unwrap().is_empty());
    assert!(response["document"].as_array().unwrap().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn second_complex_for_same_owner_conflicts(ctx: &TestHarness) {
    let owner = UserId::new();
    create_test_complex(&ctx.db_pool, owner, "First").await.unwrap();

    let (status, response) = ctx
        .api()
        .post("/api/complexes", Some(&ctx.token_for(owner)), full_complex_body("Second"))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["error"]["status"], 409);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_requires_sub_resources(ctx: &TestHarness) {
    let mut body = full_complex_body("Partial");
    body.as_object_mut().unwrap().remove("registration_and_payment");

    let (status, response) = ctx
        .api()
        .post("/api/complexes", Some(&ctx.token_for(UserId::new())), body)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"]["fields"]["registration_and_payment"].is_array());
}

#[tokio::test]
async fn create_with_failing_storage_persists_nothing() {
    let ctx = TestHarness::with_dependencies(
        TestDependencies::new().mock_storage(MockFileStorage::new().failing()),
    )
    .await
    .unwrap();
    let owner = UserId::new();
    let mut body = full_complex_body("Storage down");
    body["images"] = json!([{ "image": png_base64(), "order": 0 }]);

    let (status, _) = ctx
        .api()
        .post("/api/complexes", Some(&ctx.token_for(owner)), body)
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (status, _) = ctx.api().get("/api/complexes/mine", Some(&ctx.token_for(owner))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Reads
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn mine_returns_callers_complex(ctx: &TestHarness) {
    let owner = UserId::new();
    let complex_id = create_test_complex(&ctx.db_pool, owner, "Mine").await.unwrap();

    let (status, response) = ctx
        .api()
        .get("/api/complexes/mine", Some(&ctx.token_for(owner)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], complex_id.to_string());

    let (status, _) = ctx.api().get("/api/complexes/mine", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn gallery_is_sorted_by_order(ctx: &TestHarness) {
    let complex_id = create_test_complex(&ctx.db_pool, UserId::new(), "Sorted").await.unwrap();
    let late = add_gallery_image(&ctx.db_pool, complex_id, 9).await.unwrap();
    let early = add_gallery_image(&ctx.db_pool, complex_id, 2).await.unwrap();

    let (status, response) = ctx
        .api()
        .get(&format!("/api/complexes/{}/gallery", complex_id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = response
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![early.to_string(), late.to_string()]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_database(ctx: &TestHarness) {
    let (status, response) = ctx.api().get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["database"]["status"], "ok");
}
