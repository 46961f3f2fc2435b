//! Maps a completed third-party sign-in onto a local identity.

use crate::{AuthError, AuthMetrics, Result as AuthErrorResult};

use warden_core::{
    AuthenticatedIdentity, FederatedProfile, Identity, IdentityStore, IdentityUpdate, NewIdentity,
    Provider,
};

use std::sync::Arc;

use log::{debug, info, warn};

/// Name given to a new identity when the profile carries neither a name nor a login.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub identity: AuthenticatedIdentity,
    /// True when this sign-in created the identity
    pub created: bool,
}

pub struct IdentityResolver {
    store: Arc<dyn IdentityStore>,
    enabled_providers: Vec<Provider>,
    metrics: AuthMetrics,
}

impl IdentityResolver {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        enabled_providers: impl IntoIterator<Item = Provider>,
    ) -> Self {
        Self {
            store,
            enabled_providers: enabled_providers.into_iter().collect(),
            metrics: AuthMetrics::new(),
        }
    }

    pub fn is_enabled(&self, provider: Provider) -> bool {
        self.enabled_providers.contains(&provider)
    }

    /// Email used as the local key for a provider profile.
    ///
    /// GitHub users who hide their address fall back to the noreply form
    /// `<login>@users.noreply.github.com`.
    pub fn derive_email(provider: Provider, profile: &FederatedProfile) -> Option<String> {
        if let Some(email) = non_empty(&profile.email) {
            return Some(email.to_string());
        }

        let domain = provider.fallback_email_domain()?;
        let login = non_empty(&profile.login)?;
        Some(format!("{}@users.noreply.{}", login, domain))
    }

    /// Find or create the identity behind a federated profile.
    pub async fn resolve(
        &self,
        provider: Provider,
        profile: &FederatedProfile,
    ) -> AuthErrorResult<ResolvedIdentity> {
        if !self.is_enabled(provider) {
            return Err(AuthError::validation(
                format!("Sign-in with {} is not enabled", provider),
                Some("provider"),
            ));
        }

        let Some(email) = Self::derive_email(provider, profile) else {
            warn!("{} profile carried no usable email", provider);
            return Err(AuthError::identity_resolution_failed(provider));
        };

        if let Some(existing) = self.store.find_by_email(&email).await? {
            return self.enrich(existing, profile).await;
        }

        let new_identity = NewIdentity::federated(
            email.clone(),
            display_name(profile),
            non_empty(&profile.image).map(str::to_string),
        );

        match self.store.create(new_identity).await {
            Ok(identity) => {
                self.metrics.identity_created(provider.as_str());
                info!("Created identity {} from {} sign-in", identity.email, provider);
                Ok(ResolvedIdentity {
                    identity: identity.to_authenticated(),
                    created: true,
                })
            }
            Err(e) if e.is_duplicate() => {
                debug!("Concurrent create for {}, re-reading", email);
                match self.store.find_by_email(&email).await? {
                    Some(existing) => self.enrich(existing, profile).await,
                    None => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fill empty name/image from the profile. Existing values always win.
    async fn enrich(
        &self,
        existing: Identity,
        profile: &FederatedProfile,
    ) -> AuthErrorResult<ResolvedIdentity> {
        let update = IdentityUpdate {
            name: fill_if_empty(&existing.name, &profile.name),
            image: fill_if_empty(&existing.image, &profile.image),
            lockout: None,
        };

        let identity = if update.is_empty() {
            existing
        } else {
            debug!("Filling empty profile fields for {}", existing.email);
            self.store.update(&existing.email, update).await?
        };

        Ok(ResolvedIdentity {
            identity: identity.to_authenticated(),
            created: false,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn fill_if_empty(current: &Option<String>, incoming: &Option<String>) -> Option<String> {
    match non_empty(current) {
        Some(_) => None,
        None => non_empty(incoming).map(str::to_string),
    }
}

fn display_name(profile: &FederatedProfile) -> String {
    non_empty(&profile.name)
        .or_else(|| non_empty(&profile.login))
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string()
}
