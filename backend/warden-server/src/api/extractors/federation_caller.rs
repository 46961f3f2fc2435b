//! Axum extractor guarding the federated sign-in endpoint

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use subtle::ConstantTimeEq;

pub const FEDERATION_KEY_HEADER: &str = "X-Federation-Key";

/// Proof that the caller is the trusted OAuth callback.
///
/// The callback has already completed the provider exchange and presents the
/// shared federation key in `X-Federation-Key`.
pub struct FederationCaller;

impl FromRequestParts<AppState> for FederationCaller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.federation_key.as_deref() else {
                return Err(ApiError::forbidden("Federated sign-in is not enabled"));
            };

            let presented = parts
                .headers
                .get(FEDERATION_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| ApiError::unauthorized("Missing federation key"))?;

            if !bool::from(presented.as_bytes().ct_eq(expected.as_bytes())) {
                log::warn!("Rejected federated sign-in with wrong federation key");
                return Err(ApiError::unauthorized("Invalid federation key"));
            }

            Ok(FederationCaller)
        }
    }
}
