//! Axum extractor for `Authorization: Bearer <token>`

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Raw session token taken from the Authorization header.
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let value = parts
                .headers
                .get(header::AUTHORIZATION)
                .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?
                .to_str()
                .map_err(|_| ApiError::unauthorized("Malformed authorization header"))?;

            let token = value
                .strip_prefix("Bearer ")
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| {
                    ApiError::unauthorized("Invalid authorization scheme: expected 'Bearer'")
                })?;

            Ok(BearerToken(token.to_string()))
        }
    }
}
