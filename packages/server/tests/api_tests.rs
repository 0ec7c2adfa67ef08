//! Integration tests for the REST and SSE endpoints.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::DateTime;
use devprobe_server::{
    domain::{LOG_MESSAGES, StreamSettings},
    ui::{router::build_router, state::AppState},
};
use devprobe_shared::time::FixedClock;
use serde_json::Value;
use tower::ServiceExt;

const FIXED_TIME: &str = "2023-01-01T00:00:00.123456+09:00";

fn make_app() -> Router {
    let clock = FixedClock::new(DateTime::parse_from_rfc3339(FIXED_TIME).unwrap());
    let state = Arc::new(AppState::in_memory(
        "test".to_string(),
        StreamSettings::immediate(),
        Arc::new(clock),
    ));
    build_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Collect an SSE response and return the JSON payload of every `data:` line
async fn sse_events(app: &Router, uri: &str) -> (String, Vec<Value>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        response
            .headers()
            .get("x-accel-buffering")
            .and_then(|value| value.to_str().ok()),
        Some("no")
    );
    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-cache")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let events = text
        .lines()
        .filter_map(|line| line.strip_prefix("data: "))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect();

    (content_type, events)
}

// =========================================================================
// REST
// =========================================================================

#[tokio::test]
async fn health_reports_healthy() {
    let app = make_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "devops-test-api");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["timestamp"], FIXED_TIME);
}

#[tokio::test]
async fn info_counts_each_visit() {
    let app = make_app();

    let (_, first) = get(&app, "/api/info").await;
    let (status, second) = get(&app, "/api/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["visit_count"], 1);
    assert_eq!(second["visit_count"], 2);
    assert_eq!(second["message"], "DevOps Test Application");
    assert_eq!(second["environment"], "test");
    assert!(second["hostname"].is_string());
    assert!(second["platform"].is_string());
    assert!(second["runtime_version"].is_string());
}

#[tokio::test]
async fn status_reports_visits_without_counting() {
    let app = make_app();
    get(&app, "/api/info").await;

    let (status, json) = get(&app, "/api/status").await;
    let (_, again) = get(&app, "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["uptime"], "N/A");
    assert_eq!(json["memory_usage"], "N/A");
    assert_eq!(json["requests_processed"], 1);
    assert_eq!(again["requests_processed"], 1);
}

#[tokio::test]
async fn echo_returns_body() {
    let app = make_app();

    let (status, json) = post_raw(&app, "/api/echo", r#"{"a":1}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!({"a": 1}));
    assert_eq!(json["timestamp"], FIXED_TIME);
}

#[tokio::test]
async fn echo_accepts_any_json_value() {
    let app = make_app();

    let (status, json) = post_raw(&app, "/api/echo", "[1,2,3]").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["received"], serde_json::json!([1, 2, 3]));
}

#[tokio::test]
async fn echo_rejects_malformed_json() {
    let app = make_app();

    let (status, json) = post_raw(&app, "/api/echo", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn chat_send_appends_with_defaults() {
    let app = make_app();

    let (status, first) = post_raw(
        &app,
        "/api/chat/send",
        r#"{"username":"bob","message":"hi"}"#,
    )
    .await;
    let (_, second) = post_raw(&app, "/api/chat/send", "{}").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 1);
    assert_eq!(first["username"], "bob");
    assert_eq!(first["message"], "hi");
    assert_eq!(first["room"], "general");
    assert_eq!(first["timestamp"], FIXED_TIME);

    assert_eq!(second["id"], 2);
    assert_eq!(second["username"], "Anonymous");
    assert_eq!(second["message"], "");
}

#[tokio::test]
async fn chat_send_rejects_malformed_json() {
    let app = make_app();

    let (status, _) = post_raw(&app, "/api/chat/send", "oops").await;
    let (_, history) = get(&app, "/api/chat/messages").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(history["messages"], serde_json::json!([]));
}

#[tokio::test]
async fn chat_messages_lists_history_in_order() {
    let app = make_app();
    post_raw(&app, "/api/chat/send", r#"{"username":"a","message":"one"}"#).await;
    post_raw(&app, "/api/chat/send", r#"{"username":"b","message":"two"}"#).await;

    let (status, json) = get(&app, "/api/chat/messages").await;

    assert_eq!(status, StatusCode::OK);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["message"], "one");
    assert_eq!(messages[1]["message"], "two");
    assert_eq!(messages[1]["id"], 2);
}

#[tokio::test]
async fn root_describes_api() {
    let app = make_app();

    let (status, json) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "DevOps Test API");
    assert_eq!(json["version"], "2.0.0");
    assert!(!json["features"].as_array().unwrap().is_empty());
    assert!(!json["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = make_app();

    let (status, json) = get(&app, "/api/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

// =========================================================================
// SSE
// =========================================================================

#[tokio::test]
async fn tick_stream_sends_ten_ticks_and_completion() {
    let app = make_app();

    let (content_type, events) = sse_events(&app, "/api/stream").await;

    assert!(content_type.starts_with("text/event-stream"));
    assert_eq!(events.len(), 11);
    for (i, event) in events.iter().take(10).enumerate() {
        let n = i + 1;
        assert_eq!(event["count"], n);
        assert_eq!(event["message"], format!("Streaming message {n}"));
        assert_eq!(event["timestamp"], FIXED_TIME);
        assert!(event["hostname"].is_string());
    }
    assert_eq!(
        events[10],
        serde_json::json!({"message": "Stream complete", "count": 10})
    );
}

#[tokio::test]
async fn log_stream_sends_twenty_entries() {
    let app = make_app();

    let (content_type, events) = sse_events(&app, "/api/stream/logs").await;

    assert!(content_type.starts_with("text/event-stream"));
    assert_eq!(events.len(), 20);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event["index"], i + 1);
        let level = event["level"].as_str().unwrap();
        assert!(["INFO", "DEBUG", "WARN", "ERROR"].contains(&level));
        let message = event["message"].as_str().unwrap();
        assert!(LOG_MESSAGES.contains(&message));
        assert!(event["service"].is_string());
    }
}
