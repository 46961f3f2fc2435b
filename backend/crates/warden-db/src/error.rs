use warden_core::{ErrorLocation, StoreError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {column}: {message} {location}")]
    InvalidRow {
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn invalid_row<S: Into<String>>(column: &'static str, message: S) -> Self {
        Self::InvalidRow {
            column,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        StoreError::unavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
