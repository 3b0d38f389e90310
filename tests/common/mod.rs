//! Common Test Utilities
//!
//! Shared helpers driving the real router in-process.

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use message_board::config::Settings;
use message_board::presentation::http::routes;
use message_board::startup::AppState;

/// Test application wrapping the real router with an isolated store and
/// rate limiter per instance.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a test application with custom settings
    pub fn with_settings(settings: Settings) -> Self {
        let state = AppState::new(settings);
        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Post a message with the given content, returning the response
    pub async fn post_message(&self, content: &str) -> Response {
        let body = serde_json::json!({ "message": content }).to_string();
        self.post_json("/message", &body).await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
