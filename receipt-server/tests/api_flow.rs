//! End-to-end API tests
//!
//! Drives the real router with an injected in-memory store, exactly the
//! substitution the store seam exists for.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use receipt_server::db::models::ReceiptCreate;
use receipt_server::{Config, MemoryReceiptStore, ServerState, StoreBackend, compute_points};

const TARGET_RECEIPT: &str = r#"{
    "retailer": "Target",
    "purchaseDate": "2022-01-01",
    "purchaseTime": "13:01",
    "items": [
        {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
        {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
        {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
        {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
        {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
    ],
    "total": "35.35"
}"#;

fn test_app() -> Router {
    let config = Config::with_overrides(0, StoreBackend::Memory);
    let state = ServerState::new(config, Arc::new(MemoryReceiptStore::new()));
    receipt_server::api::app(state)
}

async fn submit(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/receipts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn get_points(app: &Router, id: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/receipts/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn submit_then_retrieve_points() {
    let app = test_app();

    let (status, body) = submit(&app, TARGET_RECEIPT).await;
    assert_eq!(status, StatusCode::OK);

    let id = body["id"].as_str().expect("response must carry an id");
    assert!(!id.is_empty());

    let (status, body) = get_points(&app, id).await;
    assert_eq!(status, StatusCode::OK);

    // The served score must match a direct engine call on the same data
    let payload: ReceiptCreate = serde_json::from_str(TARGET_RECEIPT).unwrap();
    let expected = compute_points(&payload.into_receipt(id.to_string()));
    assert_eq!(body["points"].as_u64(), Some(expected as u64));
    assert_eq!(expected, 28);
}

#[tokio::test]
async fn points_retrieval_is_idempotent() {
    let app = test_app();

    let (_, body) = submit(&app, TARGET_RECEIPT).await;
    let id = body["id"].as_str().unwrap().to_string();

    let (_, first) = get_points(&app, &id).await;
    for _ in 0..3 {
        let (status, next) = get_points(&app, &id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(next, first);
    }
}

#[tokio::test]
async fn each_submission_gets_a_distinct_id() {
    let app = test_app();

    let (_, first) = submit(&app, TARGET_RECEIPT).await;
    let (_, second) = submit(&app, TARGET_RECEIPT).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn unknown_id_returns_404() {
    let app = test_app();

    let (status, _) = get_points(&app, "no-such-receipt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = test_app();

    let (status, _) = submit(&app, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_field_returns_400() {
    // Strict shape: a submission without a total is undecodable
    let (status, _) = submit(
        &test_app(),
        r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "items": []}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_fields_degrade_to_zero_not_an_error() {
    // Field contents are lenient: the receipt is accepted and every rule
    // that needs the malformed field contributes nothing
    let app = test_app();

    let (status, body) = submit(
        &app,
        r#"{"retailer": "", "purchaseDate": "bogus", "purchaseTime": "bogus", "items": [], "total": "bogus"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = body["id"].as_str().unwrap();
    let (status, body) = get_points(&app, id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_u64(), Some(0));
}

#[tokio::test]
async fn health_endpoint_reports_backend() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store_backend"], "memory");
}
