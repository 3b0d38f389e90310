//! Rate Limit API Tests
//!
//! All in-process requests share one client identity, so a small window
//! budget is exhausted deterministically.

use std::time::Duration;

use axum::http::StatusCode;

use message_board::config::Settings;

use crate::common::{body_json, TestApp};

fn app_with_limit(window_ms: u64, max_requests: u32) -> TestApp {
    let mut settings = Settings::default();
    settings.rate_limit.window_ms = window_ms;
    settings.rate_limit.max_requests = max_requests;
    TestApp::with_settings(settings)
}

#[tokio::test]
async fn third_request_within_window_is_limited() {
    let app = app_with_limit(1000, 2);

    assert_eq!(app.post_message("one").await.status(), StatusCode::CREATED);
    assert_eq!(app.post_message("two").await.status(), StatusCode::CREATED);

    let response = app.post_message("three").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    assert_eq!(response.headers()["x-ratelimit-remaining"], "0");

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("rate limited"));
}

#[tokio::test]
async fn limit_recovers_after_window_elapses() {
    let app = app_with_limit(250, 1);

    assert_eq!(app.post_message("one").await.status(), StatusCode::CREATED);
    assert_eq!(
        app.post_message("two").await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(
        app.post_message("three").await.status(),
        StatusCode::CREATED
    );
}

#[tokio::test]
async fn malformed_traffic_does_not_bypass_throttling() {
    let app = app_with_limit(1000, 1);

    // The first request is malformed but still consumes the budget.
    let response = app.post_json("/message", "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post_message("valid").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn read_requests_are_limited_too() {
    let app = app_with_limit(1000, 2);

    assert_eq!(app.get("/messages").await.status(), StatusCode::OK);
    assert_eq!(app.get("/messages").await.status(), StatusCode::OK);
    assert_eq!(
        app.get("/messages").await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn allowed_responses_carry_rate_limit_headers() {
    let app = app_with_limit(60_000, 5);

    let response = app.get("/messages").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-ratelimit-limit"], "5");
    assert_eq!(response.headers()["x-ratelimit-remaining"], "4");
}

#[tokio::test]
async fn health_endpoints_are_not_rate_limited() {
    let app = app_with_limit(60_000, 1);

    // Exhaust the message budget first.
    app.post_message("one").await;
    assert_eq!(
        app.post_message("two").await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );

    for _ in 0..3 {
        assert_eq!(app.get("/health").await.status(), StatusCode::OK);
    }
}
