use crate::{AuthError, AuthMetrics, CredentialHasher, Result as AuthErrorResult};

use warden_core::{AuthenticatedIdentity, IdentityStore, NewIdentity, StoreError};

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Self-service account creation form.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub struct Registrar {
    store: Arc<dyn IdentityStore>,
    hasher: CredentialHasher,
    metrics: AuthMetrics,
}

impl Registrar {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: CredentialHasher) -> Self {
        Self {
            store,
            hasher,
            metrics: AuthMetrics::new(),
        }
    }

    /// Create a password identity with zeroed lockout counters.
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        let (Some(name), Some(email), Some(password)) = (
            request.name.filter(|v| !v.is_empty()),
            request.email.filter(|v| !v.is_empty()),
            request.password.filter(|v| !v.is_empty()),
        ) else {
            return Err(AuthError::validation("All fields are required", None));
        };

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::validation(
                format!(
                    "Password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
                Some("password"),
            ));
        }

        if self.store.find_by_email(&email).await?.is_some() {
            debug!("Registration refused, {} already exists", email);
            return Err(AuthError::email_taken(email));
        }

        let password_hash = self.hasher.hash_on_blocking_pool(password).await?;

        let identity = match self
            .store
            .create(NewIdentity::registered(email, name, password_hash))
            .await
        {
            Ok(identity) => identity,
            Err(StoreError::Duplicate { email, .. }) => return Err(AuthError::email_taken(email)),
            Err(e) => return Err(e.into()),
        };

        self.metrics.identity_created("registered");
        info!("Registered identity {}", identity.email);

        Ok(identity.to_authenticated())
    }
}
