use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The public fields of an identity that passed authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
