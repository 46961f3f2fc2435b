use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures surfaced by an [`IdentityStore`](crate::IdentityStore) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identity already exists: {email} {location}")]
    Duplicate {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity not found: {email} {location}")]
    NotFound {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate<S: Into<String>>(email: S) -> Self {
        Self::Duplicate {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(email: S) -> Self {
        Self::NotFound {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
