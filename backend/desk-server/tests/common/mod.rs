#![allow(dead_code)]

//! Test infrastructure for desk-server API tests

use desk_config::{PagingConfig, ValidationConfig};
use desk_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// AppState over a fresh in-memory database with default limits
pub async fn create_test_app_state() -> AppState {
    let pool = desk_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, PagingConfig::default(), ValidationConfig::default())
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Send one request; the body is parsed as JSON when there is one
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

pub fn ticket_body(title: &str, receivers: &[&str]) -> Value {
    json!({
        "title": title,
        "content": "Details",
        "purpose": "Purpose",
        "requirement": "Requirement",
        "grade": "HIGH",
        "deadline": "2026-12-01 18:00",
        "receivers": receivers,
    })
}

/// Create a ticket through the API and return its sent-view
pub async fn create_ticket(app: &Router, writer: &str, title: &str, receivers: &[&str]) -> Value {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/tickets?writer={}", writer),
        Some(ticket_body(title, receivers)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", json);
    json
}

/// `pno` of `receiver`'s personal record inside a sent-view
pub fn pno_of(view: &Value, receiver: &str) -> i64 {
    view["personals"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["receiver"] == receiver)
        .and_then(|p| p["pno"].as_i64())
        .unwrap()
}
