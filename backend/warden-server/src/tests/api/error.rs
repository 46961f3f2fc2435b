use crate::ApiError;

use warden_auth::AuthError;
use warden_core::{Provider, StoreError};

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value, Option<String>) {
    let response = error.into_response();
    let status = response.status();
    let retry_after = response
        .headers()
        .get(header::RETRY_AFTER)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap(), retry_after)
}

#[test]
fn test_auth_error_status_codes() {
    let cases = [
        (
            AuthError::validation("Email and password are required", None),
            StatusCode::BAD_REQUEST,
        ),
        (AuthError::invalid_credentials(), StatusCode::UNAUTHORIZED),
        (AuthError::account_locked(15), StatusCode::LOCKED),
        (AuthError::email_taken("a@b.com"), StatusCode::CONFLICT),
        (
            AuthError::identity_resolution_failed(Provider::GitHub),
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::from(StoreError::unavailable("disk gone")),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(ApiError::from(error).status_code(), expected);
    }
}

#[test]
fn test_request_error_status_codes() {
    assert_eq!(
        ApiError::unauthorized("x").status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        ApiError::bad_request("x").status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_locked_response_carries_retry_after() {
    let (status, json, retry_after) =
        body_json(ApiError::from(AuthError::account_locked(15))).await;

    assert_eq!(status, StatusCode::LOCKED);
    assert_eq!(retry_after.as_deref(), Some("900"));
    assert_eq!(json["error"]["code"], "ACCOUNT_LOCKED");
    assert_eq!(
        json["error"]["message"],
        "Your account is temporarily locked. Try again in 15 minutes."
    );
}

#[tokio::test]
async fn test_validation_response_includes_field() {
    let (_, json, retry_after) = body_json(ApiError::from(AuthError::validation(
        "Password must be at least 8 characters",
        Some("password"),
    )))
    .await;

    assert_eq!(retry_after, None);
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let (status, json, _) = body_json(ApiError::from(AuthError::from(
        StoreError::unavailable("connection refused to /var/db"),
    )))
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["message"], "Service temporarily unavailable");
    assert!(json["error"].get("field").is_none());
}
