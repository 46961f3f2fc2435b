use crate::{AuthError, CredentialHasher, LockoutTracker, Result as AuthErrorResult};

use warden_core::{AuthenticatedIdentity, IdentityStore};

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;

/// Email and password as submitted. Either may be missing.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsAttempt {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsAttempt {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for CredentialsAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsAttempt")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Email/password sign-in guarded by the lockout tracker.
pub struct Authenticator {
    store: Arc<dyn IdentityStore>,
    tracker: LockoutTracker,
    hasher: CredentialHasher,
}

impl Authenticator {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        tracker: LockoutTracker,
        hasher: CredentialHasher,
    ) -> Self {
        Self {
            store,
            tracker,
            hasher,
        }
    }

    pub fn tracker(&self) -> &LockoutTracker {
        &self.tracker
    }

    /// Check a credentials attempt.
    ///
    /// A locked account is refused before the password is looked at, and the
    /// refusal does not depend on whether the password is right. Unknown
    /// emails and password-less accounts fail exactly like a wrong password.
    pub async fn authenticate(
        &self,
        attempt: CredentialsAttempt,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        let (Some(email), Some(password)) = (
            attempt.email.filter(|e| !e.is_empty()),
            attempt.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::validation(
                "Email and password are required",
                None,
            ));
        };

        if self.tracker.is_locked(&email).await? {
            warn!("Rejected sign-in for locked identity {}", email);
            return Err(AuthError::account_locked(
                self.tracker.policy().lockout_minutes(),
            ));
        }

        let identity = match self.store.find_by_email(&email).await? {
            Some(identity) if identity.has_password() => identity,
            _ => {
                debug!("No password identity for {}", email);
                self.tracker.record_failure(&email).await?;
                return Err(AuthError::invalid_credentials());
            }
        };

        let stored_hash = identity.password_hash.clone().unwrap_or_default();
        if !self
            .hasher
            .verify_on_blocking_pool(password, stored_hash)
            .await
        {
            debug!("Password mismatch for {}", email);
            self.tracker.record_failure(&email).await?;
            return Err(AuthError::invalid_credentials());
        }

        self.tracker.record_success(&email).await?;

        Ok(identity.to_authenticated())
    }
}
