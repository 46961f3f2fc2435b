use warden_core::{FederatedProfile, Provider};

use serde::Deserialize;

/// Profile handed over by the OAuth callback after a completed exchange
#[derive(Debug, Deserialize)]
pub struct FederatedSignInRequest {
    /// "google" or "github"
    pub provider: Provider,

    #[serde(default)]
    pub profile: FederatedProfile,
}
