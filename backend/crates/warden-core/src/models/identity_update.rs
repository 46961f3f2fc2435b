use crate::Identity;

use chrono::{DateTime, Utc};

/// Failure counter and lockout deadline. Always written as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockoutState {
    pub failed_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
}

impl LockoutState {
    /// Zero failures, no lock.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether the lock is still in force at `now`.
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }
}

/// Partial update accepted by the identity store. `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub lockout: Option<LockoutState>,
}

impl IdentityUpdate {
    pub fn lockout(state: LockoutState) -> Self {
        Self {
            lockout: Some(state),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.lockout.is_none()
    }

    /// Apply this update to an in-memory record.
    pub fn apply_to(&self, identity: &mut Identity, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            identity.name = Some(name.clone());
        }
        if let Some(image) = &self.image {
            identity.image = Some(image.clone());
        }
        if let Some(lockout) = self.lockout {
            identity.failed_attempts = lockout.failed_attempts;
            identity.locked_until = lockout.locked_until;
        }
        identity.updated_at = now;
    }
}
