//! End-to-end tests for the receipt routes, driven through the router
//! without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use receipt_api::{router, AppState};

fn app() -> Router {
    router(Arc::new(AppState::new().unwrap()))
}

fn target_receipt() -> Value {
    json!({
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
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M-Corner-Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

async fn post_receipt(app: &Router, receipt: &Value) -> (StatusCode, Value) {
    post_raw(app, receipt.to_string()).await
}

async fn get_points(app: &Router, id: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn process_then_score(app: &Router, receipt: &Value) -> u64 {
    let (status, body) = post_receipt(app, receipt).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = get_points(app, &id).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["points"].as_u64().unwrap()
}

async fn assert_rejected(app: &Router, receipt: &Value) {
    let (status, body) = post_receipt(app, receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_target_receipt_scores_28() {
    let app = app();
    assert_eq!(process_then_score(&app, &target_receipt()).await, 28);
}

#[tokio::test]
async fn test_corner_market_receipt_scores_109() {
    let app = app();
    assert_eq!(process_then_score(&app, &corner_market_receipt()).await, 109);
}

#[tokio::test]
async fn test_same_receipt_twice_gets_two_ids() {
    let app = app();
    let (_, first) = post_receipt(&app, &target_receipt()).await;
    let (_, second) = post_receipt(&app, &target_receipt()).await;
    assert_ne!(first["id"], second["id"]);

    let (_, health) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["receipts"], 2);
}

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let app = app();
    let (status, body) = post_raw(&app, Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_still_decodes() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .body(Body::from(target_receipt().to_string()))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK, "{body}");
}

#[tokio::test]
async fn test_malformed_fields_are_rejected() {
    let app = app();

    let mut short_price = target_receipt();
    short_price["items"][0]["price"] = json!("6.4");
    assert_rejected(&app, &short_price).await;

    let mut bad_date = target_receipt();
    bad_date["purchaseDate"] = json!("2022-02-30");
    assert_rejected(&app, &bad_date).await;

    let mut bad_time = target_receipt();
    bad_time["purchaseTime"] = json!("1:01");
    assert_rejected(&app, &bad_time).await;

    let mut missing_total = target_receipt();
    missing_total.as_object_mut().unwrap().remove("total");
    assert_rejected(&app, &missing_total).await;
}

#[tokio::test]
async fn test_rule_violations_are_rejected() {
    let app = app();

    let mut spaced_retailer = target_receipt();
    spaced_retailer["retailer"] = json!("Tar get");
    assert_rejected(&app, &spaced_retailer).await;

    let mut bad_description = target_receipt();
    bad_description["items"][1]["shortDescription"] = json!("Pizza!");
    assert_rejected(&app, &bad_description).await;

    let mut future = target_receipt();
    future["purchaseDate"] = json!("2999-01-01");
    assert_rejected(&app, &future).await;
}

#[tokio::test]
async fn test_total_mismatch_rejected_both_ways() {
    let app = app();

    let mut over = target_receipt();
    over["total"] = json!("35.36");
    assert_rejected(&app, &over).await;

    let mut under = target_receipt();
    under["total"] = json!("35.34");
    assert_rejected(&app, &under).await;
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let app = app();
    post_receipt(&app, &target_receipt()).await;

    for id in ["00000000-0000-4000-8000-000000000000", "not-a-uuid", "123"] {
        let (status, body) = get_points(&app, id).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{id}");
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
