//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn liveness_probe_returns_alive() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn readiness_probe_reports_store_count() {
    let app = TestApp::new();

    let json = body_json(app.get("/health/ready").await).await;
    assert_eq!(json["status"], "ready");
    assert_eq!(json["stored_messages"], 0);

    app.post_message("hello").await;

    let json = body_json(app.get("/health/ready").await).await;
    assert_eq!(json["stored_messages"], 1);
}
