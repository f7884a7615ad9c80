#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt; // for `oneshot`

use medtrack_api::{build_router, config::Config, db, AppState};

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        jwt_secret: TEST_SECRET.into(),
        jwt_expiry_days: 7,
        bcrypt_cost: 4, // bcrypt's minimum, keeps the suite fast
        host: "127.0.0.1".into(),
        port: 0,
        cors_origin: None,
    }
}

pub async fn test_pool() -> SqlitePool {
    db::create_memory_pool().await.unwrap()
}

/// Router over a fresh in-memory database, plus the pool for direct checks.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        db: pool.clone(),
        config: Arc::new(test_config()),
    };
    (build_router(state), pool)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Registers a patient and returns `(token, user_id)`.
pub async fn register(app: &Router, email: &str) -> (String, i64) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": "password123",
            "name": "Test User",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_i64().unwrap(),
    )
}

/// Creates a medication and returns its id.
pub async fn add_medication(app: &Router, token: &str, name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/medications",
        Some(token),
        Some(serde_json::json!({ "name": name, "dosage": "200mg", "frequency": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["id"].as_i64().unwrap()
}
