//! Identity entity - a user's account record keyed by email.

use crate::{AuthenticatedIdentity, LockoutState};

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account as held by the identity store.
///
/// `Debug` is implemented by hand so the password hash never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// Unique natural key, case-sensitive as stored
    pub email: String,
    /// Absent for accounts created through a federated provider
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    /// Consecutive failed credential checks since the last success
    pub failed_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// True when a non-empty password hash is stored.
    pub fn has_password(&self) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| !hash.is_empty())
    }

    /// Current lockout counter and deadline.
    pub fn lockout_state(&self) -> LockoutState {
        LockoutState {
            failed_attempts: self.failed_attempts,
            locked_until: self.locked_until,
        }
    }

    /// Public fields handed to the session layer.
    pub fn to_authenticated(&self) -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "<redacted>"),
            )
            .field("name", &self.name)
            .field("image", &self.image)
            .field("failed_attempts", &self.failed_attempts)
            .field("locked_until", &self.locked_until)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Field set for creating an identity. Counters always start at zero.
#[derive(Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub password_hash: Option<String>,
}

impl NewIdentity {
    /// Identity created on first federated sign-in (no password).
    pub fn federated(email: String, name: String, image: Option<String>) -> Self {
        Self {
            email,
            name: Some(name),
            image,
            password_hash: None,
        }
    }

    /// Identity created through explicit registration.
    pub fn registered(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name: Some(name),
            image: None,
            password_hash: Some(password_hash),
        }
    }

    /// Materialize the record the store will hold.
    pub fn into_identity(self, id: Uuid, now: DateTime<Utc>) -> Identity {
        Identity {
            id,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            image: self.image,
            failed_attempts: 0,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("image", &self.image)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
