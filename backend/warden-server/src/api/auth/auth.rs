//! Authentication REST API handlers
//!
//! JSON transport for registration, sign-in and session lookup. All
//! decisions are made by the authentication engine in `warden-auth`.

use crate::{
    ApiResult, AppState, BearerToken, FederatedSignInRequest, FederationCaller, RegisterResponse,
    SessionResponse, SignInResponse,
};

use warden_auth::{CredentialsAttempt, RegistrationRequest, SessionClaims, SignInAttempt};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/register
///
/// Create a password identity
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;

    let user = state.registrar.register(request).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}

/// POST /api/auth/login
///
/// Email and password sign-in
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsAttempt>, JsonRejection>,
) -> ApiResult<Json<SignInResponse>> {
    let Json(credentials) = payload?;

    let claims = state
        .auth
        .sign_in(SignInAttempt::Credentials(credentials))
        .await?;

    sign_in_response(&state, claims)
}

/// POST /api/auth/federated
///
/// Sign-in on behalf of the OAuth callback
pub async fn federated_sign_in(
    State(state): State<AppState>,
    _caller: FederationCaller,
    payload: Result<Json<FederatedSignInRequest>, JsonRejection>,
) -> ApiResult<Json<SignInResponse>> {
    let Json(request) = payload?;

    let claims = state
        .auth
        .sign_in(SignInAttempt::Federated {
            provider: request.provider,
            profile: request.profile,
        })
        .await?;

    sign_in_response(&state, claims)
}

/// GET /api/auth/session
///
/// Decode the bearer token into the client session
pub async fn session(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<SessionResponse>> {
    let claims = state.codec.decode(&token)?;

    Ok(Json(SessionResponse {
        session: state.auth.issuer().to_session_view(&claims),
    }))
}

fn sign_in_response(state: &AppState, claims: SessionClaims) -> ApiResult<Json<SignInResponse>> {
    let token = state.codec.encode(&claims)?;

    Ok(Json(SignInResponse {
        token,
        session: state.auth.issuer().to_session_view(&claims),
    }))
}
