//! Integration tests for health endpoints
mod common;

use crate::common::create_test_app_state;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use warden_server::build_router;

#[tokio::test]
async fn test_health_reports_database_operational() {
    let app = build_router(create_test_app_state().await);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert_eq!(json["components"]["federation"], "enabled");
}

#[tokio::test]
async fn test_liveness_ok() {
    let app = build_router(create_test_app_state().await);

    let request = Request::builder().uri("/live").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_ok_with_database() {
    let app = build_router(create_test_app_state().await);

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_unavailable_after_pool_closed() {
    let state = create_test_app_state().await;
    state.pool.close().await;
    let app = build_router(state);

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
