use warden_core::AuthenticatedIdentity;

use serde::Serialize;

/// Newly registered identity
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: AuthenticatedIdentity,
}
