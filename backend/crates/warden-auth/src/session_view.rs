use serde::{Deserialize, Serialize};

/// Client-facing session shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// Omitted entirely when the identity has no avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
