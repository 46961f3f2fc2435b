//! REST API error types
//!
//! Every failure leaves the server as `{ "error": { code, message, field? } }`
//! with a status derived from the error kind. The message is the short
//! user-facing text; locations only go to the log.

use warden_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_CREDENTIALS", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication engine rejection, status by kind
    #[error("{source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    /// Missing or malformed credentials on the request itself (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Endpoint disabled by configuration (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth { source, .. } => auth_status(source),
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

fn auth_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::Validation { .. } => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials { .. }
        | AuthError::TokenExpired { .. }
        | AuthError::InvalidToken { .. }
        | AuthError::InvalidClaim { .. } => StatusCode::UNAUTHORIZED,
        AuthError::AccountLocked { .. } => StatusCode::LOCKED,
        AuthError::EmailTaken { .. } => StatusCode::CONFLICT,
        AuthError::IdentityResolutionFailed { .. } => StatusCode::FORBIDDEN,
        AuthError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AuthError::Hashing { .. } | AuthError::TokenEncode { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let retry_after = match &self {
            ApiError::Auth {
                source:
                    AuthError::AccountLocked {
                        retry_after_minutes,
                        ..
                    },
                ..
            } => Some(retry_after_minutes * 60),
            _ => None,
        };

        let body = match self {
            ApiError::Auth { source, .. } => ApiErrorBody {
                code: source.error_code().into(),
                message: source.user_message(),
                field: source.field(),
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        ApiError::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON body rejections to API errors
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
