use crate::{AppState, federated_sign_in, health, login, register, session};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication
        .route("/api/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/federated", post(federated_sign_in))
        .route("/api/auth/session", get(session))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
