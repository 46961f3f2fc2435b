use serde::{Deserialize, Serialize};

/// Profile returned by an identity provider after a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FederatedProfile {
    pub email: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Avatar URL
    pub image: Option<String>,
    /// Provider-specific login handle (GitHub username)
    pub login: Option<String>,
}
