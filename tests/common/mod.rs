//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use user_registry::{create_router, AppState, Database};

/// Fresh in-memory SQLite database with the schema applied.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database.
pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    db.run_migrations().await.expect("Failed to run migrations");
    Arc::new(db)
}

/// Router wired exactly as `serve` wires it.
pub async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, body)
}

pub fn post_user(email: &str, username: &str, password: &str) -> Request<Body> {
    json_post(serde_json::json!({
        "email": email,
        "username": username,
        "password": password,
    }))
}

pub fn json_post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
