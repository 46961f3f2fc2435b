use crate::{SessionClaims, SessionUser, SessionView};

use warden_core::AuthenticatedIdentity;

/// Turns an authenticated identity into session claims, and claims into the
/// session a client sees.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIssuer;

impl SessionIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Copy the identity fields verbatim. No other claims are added.
    pub fn issue(&self, identity: &AuthenticatedIdentity) -> SessionClaims {
        SessionClaims {
            id: identity.id.to_string(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            image: identity.image.clone(),
        }
    }

    pub fn to_session_view(&self, claims: &SessionClaims) -> SessionView {
        SessionView {
            user: SessionUser {
                id: claims.id.clone(),
                email: claims.email.clone(),
                name: claims.name.clone(),
                image: claims.image.clone().filter(|image| !image.is_empty()),
            },
        }
    }
}
