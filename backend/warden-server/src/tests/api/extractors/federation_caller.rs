use crate::{ApiError, AppState, FEDERATION_KEY_HEADER, FederationCaller};

use warden_auth::CredentialHasher;
use warden_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};

const KEY: &str = "federation-key-that-is-long-enough-0123";

async fn create_test_state(federation_key: Option<&str>) -> AppState {
    let mut config = Config::default();
    config.auth.session_secret = Some("session-secret-that-is-long-enough-0123".to_string());
    config.auth.federation_key = federation_key.map(str::to_string);

    let pool = warden_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState::with_hasher(pool, &config, CredentialHasher::with_cost(4))
        .expect("Test config should be valid")
}

async fn extract(state: &AppState, key: Option<&str>) -> Result<FederationCaller, ApiError> {
    let mut builder = Request::builder();
    if let Some(key) = key {
        builder = builder.header(FEDERATION_KEY_HEADER, key);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    FederationCaller::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_accepts_matching_key() {
    let state = create_test_state(Some(KEY)).await;

    assert!(extract(&state, Some(KEY)).await.is_ok());
}

#[tokio::test]
async fn test_extractor_rejects_same_length_wrong_key() {
    let state = create_test_state(Some(KEY)).await;
    let wrong = format!("{}X", &KEY[..KEY.len() - 1]);

    let result = extract(&state, Some(&wrong)).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_key_prefix() {
    let state = create_test_state(Some(KEY)).await;

    let result = extract(&state, Some(&KEY[..10])).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_missing_key() {
    let state = create_test_state(Some(KEY)).await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_forbidden_when_federation_disabled() {
    let state = create_test_state(None).await;

    let result = extract(&state, Some(KEY)).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}
