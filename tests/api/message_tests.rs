//! Message API Tests
//!
//! End-to-end coverage of the message CRUD contract: creation, validation
//! failures, ordering, list limits, lookup, delete, and retention.

use axum::http::StatusCode;

use message_board::config::Settings;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn post_valid_message_returns_created() {
    let app = TestApp::new();

    let response = app.post_message("hello world").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["content"], "hello world");
    let created_at = json["createdAt"].as_str().expect("createdAt string");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn post_trims_surrounding_whitespace() {
    let app = TestApp::new();

    let response = app.post_message("  hi there  ").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["content"], "hi there");
}

#[tokio::test]
async fn post_empty_message_is_rejected() {
    let app = TestApp::new();

    let response = app.post_message("   ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"][0]["field"], "message");

    // The store must be unchanged after a rejected create.
    let list = body_json(app.get("/messages").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn post_missing_field_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/message", "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "message");
    assert_eq!(json["details"][0]["message"], "message is required");
}

#[tokio::test]
async fn post_non_string_field_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json("/message", r#"{"message": 42}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["details"][0]["message"], "message must be a string");
}

#[tokio::test]
async fn post_over_length_message_is_rejected() {
    let app = TestApp::new();

    let too_long = "a".repeat(501);
    let response = app.post_message(&too_long).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let at_limit = "a".repeat(500);
    let response = app.post_message(&at_limit).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn configured_max_length_is_enforced() {
    let mut settings = Settings::default();
    settings.message.max_length = 5;
    let app = TestApp::with_settings(settings);

    assert_eq!(
        app.post_message("12345").await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        app.post_message("123456").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = TestApp::new();
    for content in ["A", "B", "C"] {
        app.post_message(content).await;
    }

    let response = app.get("/messages?limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let contents: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let app = TestApp::new();

    let json = body_json(app.get("/messages").await).await;
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_without_limit_uses_default() {
    let app = TestApp::new();
    for i in 0..12 {
        app.post_message(&format!("msg {}", i)).await;
    }

    let json = body_json(app.get("/messages").await).await;
    assert_eq!(json.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn list_with_zero_limit_uses_default() {
    let app = TestApp::new();
    for i in 0..12 {
        app.post_message(&format!("msg {}", i)).await;
    }

    let json = body_json(app.get("/messages?limit=0").await).await;
    assert_eq!(json.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn list_with_oversized_limit_returns_all() {
    let app = TestApp::new();
    for i in 0..3 {
        app.post_message(&format!("msg {}", i)).await;
    }

    let json = body_json(app.get("/messages?limit=1000").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn get_message_by_id() {
    let app = TestApp::new();
    let created = body_json(app.post_message("findable").await).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.get(&format!("/message/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"].as_i64().unwrap(), id);
    assert_eq!(json["content"], "findable");
}

#[tokio::test]
async fn get_missing_message_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/message/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Message not found");
}

#[tokio::test]
async fn get_malformed_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.get("/message/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_message_then_delete_again() {
    let app = TestApp::new();
    let created = body_json(app.post_message("short lived").await).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.delete(&format!("/message/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("deleted"));

    // Second delete reliably reports not found, never a second success.
    let response = app.delete(&format!("/message/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get(&format!("/message/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn retention_evicts_oldest_message() {
    let mut settings = Settings::default();
    settings.history.max_messages = 3;
    let app = TestApp::with_settings(settings);

    let first = body_json(app.post_message("first").await).await;
    let first_id = first["id"].as_i64().unwrap();
    for content in ["second", "third", "fourth"] {
        app.post_message(content).await;
    }

    let json = body_json(app.get("/messages?limit=10").await).await;
    let contents: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["fourth", "third", "second"]);

    let response = app.get(&format!("/message/{}", first_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
