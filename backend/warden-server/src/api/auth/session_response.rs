use warden_auth::SessionView;

use serde::Serialize;

/// Successful sign-in: the signed token plus the session it carries
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
    pub session: SessionView,
}

/// Session decoded from a presented token
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: SessionView,
}
