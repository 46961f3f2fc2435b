#![allow(dead_code)]

//! Test infrastructure for warden-server API tests

use warden_auth::CredentialHasher;
use warden_config::{Config, ProviderConfig};
use warden_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-session-secret-that-is-long-enough-0123456789";
pub const TEST_FEDERATION_KEY: &str = "test-federation-key-long-enough-0123456789";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Configuration with a session secret, a federation key and GitHub enabled
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.session_secret = Some(TEST_SECRET.to_string());
    config.auth.federation_key = Some(TEST_FEDERATION_KEY.to_string());
    config.providers.github = ProviderConfig {
        client_id: Some("github-client".to_string()),
        client_secret: Some("github-secret".to_string()),
    };
    config
}

/// Create AppState for testing over an in-memory identity database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(&test_config()).await
}

pub async fn create_test_app_state_with(config: &Config) -> AppState {
    let pool = warden_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::with_hasher(pool, config, CredentialHasher::with_cost(4))
        .expect("Test config should be valid")
}

/// Send a JSON request and return status plus parsed body (Null when empty or not JSON)
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Register an identity through the API
pub async fn register_user(app: &Router, email: &str) {
    let (status, _) = send_json(
        app,
        "POST",
        "/api/register",
        &[],
        Some(json!({ "name": "Ada", "email": email, "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

/// Attempt a credentials sign-in
pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send_json(
        app,
        "POST",
        "/api/auth/login",
        &[],
        Some(json!({ "email": email, "password": password })),
    )
    .await
}
