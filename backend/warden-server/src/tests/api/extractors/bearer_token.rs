use crate::{ApiError, BearerToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> Result<BearerToken, ApiError> {
    let (mut parts, _body) = request.into_parts();
    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_extractor_with_bearer_header() {
    let request = Request::builder()
        .header("Authorization", "Bearer abc.def.ghi")
        .body(Body::empty())
        .unwrap();

    let token = extract(request).await.unwrap();

    assert_eq!(token.0, "abc.def.ghi");
}

#[tokio::test]
async fn test_extractor_missing_header() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_wrong_scheme() {
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_empty_token() {
    let request = Request::builder()
        .header("Authorization", "Bearer ")
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(result.is_err());
}
