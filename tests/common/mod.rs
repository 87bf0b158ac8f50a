//! Shared helpers: an app over a fresh in-memory SQLite database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::{api::create_router, infra::Database, AppState, Config};

/// Database with all migrations applied.
pub async fn test_database() -> Arc<Database> {
    let config = Config::with_database("sqlite::memory:");
    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should connect"),
    )
}

/// Router wired exactly as in `serve`.
pub async fn test_app() -> Router {
    test_app_with_database().await.0
}

/// Router plus a handle on its database, for tests that tamper with storage.
pub async fn test_app_with_database() -> (Router, Arc<Database>) {
    let database = test_database().await;
    let app = create_router(AppState::new(database.clone(), "Test API"));
    (app, database)
}

/// Send a request and decode the body as JSON (`Null` when empty,
/// a JSON string when the body is not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

/// Valid creation payload.
pub fn user_payload(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": "Str0ng!Pass",
    })
}

/// Create a user through the API and return its id.
pub async fn create_user(app: &Router, username: &str, email: &str) -> String {
    let (status, body) = send(app, Method::POST, "/users", Some(user_payload(username, email))).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["id"].as_str().expect("id in response").to_string()
}
