use warden_core::{ErrorLocation, Provider, StoreError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Account locked for {retry_after_minutes} minutes {location}")]
    AccountLocked {
        retry_after_minutes: i64,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Could not resolve an identity from {provider} profile {location}")]
    IdentityResolutionFailed {
        provider: Provider,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    EmailTaken {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity store failed: {source} {location}")]
    StoreUnavailable {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_locked(retry_after_minutes: i64) -> Self {
        Self::AccountLocked {
            retry_after_minutes,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_resolution_failed(provider: Provider) -> Self {
        Self::IdentityResolutionFailed {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_taken<S: Into<String>>(email: S) -> Self {
        Self::EmailTaken {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::AccountLocked { .. } => "ACCOUNT_LOCKED",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::IdentityResolutionFailed { .. } => "IDENTITY_RESOLUTION_FAILED",
            Self::EmailTaken { .. } => "EMAIL_TAKEN",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Short text safe to show an end user. Never includes the error location.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::AccountLocked {
                retry_after_minutes,
                ..
            } => format!(
                "Your account is temporarily locked. Try again in {} minutes.",
                retry_after_minutes
            ),
            Self::InvalidCredentials { .. } => "Invalid email or password".to_string(),
            Self::IdentityResolutionFailed { provider, .. } => {
                format!("Unable to sign in with {}", provider)
            }
            Self::EmailTaken { .. } => "User already exists".to_string(),
            Self::StoreUnavailable { .. } => "Service temporarily unavailable".to_string(),
            Self::TokenExpired { .. } => "Session expired".to_string(),
            Self::InvalidToken { .. } | Self::InvalidClaim { .. } => "Invalid session".to_string(),
            Self::Hashing { .. } | Self::TokenEncode { .. } => "Internal server error".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::StoreUnavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
