use crate::{AuthError, Result as AuthErrorResult};

use warden_core::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Identity snapshot carried by a session token. Copied at sign-in and not
/// refreshed until the next sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Local identity id
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SessionClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.id.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "id".to_string(),
                message: "id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
