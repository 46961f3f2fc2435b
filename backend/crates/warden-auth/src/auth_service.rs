//! Single entry point for every sign-in method.

use crate::{
    AuthMetrics, Authenticator, Clock, CredentialHasher, IdentityResolver, LockoutPolicy,
    LockoutTracker, Result as AuthErrorResult, SessionClaims, SessionIssuer, SignInAttempt,
};

use warden_core::{IdentityStore, Provider};

use std::sync::Arc;

use log::{info, warn};

pub struct AuthService {
    authenticator: Authenticator,
    resolver: IdentityResolver,
    issuer: SessionIssuer,
    metrics: AuthMetrics,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        clock: Arc<dyn Clock>,
        policy: LockoutPolicy,
        hasher: CredentialHasher,
        enabled_providers: impl IntoIterator<Item = Provider>,
    ) -> Self {
        let tracker = LockoutTracker::new(Arc::clone(&store), clock, policy);

        Self {
            authenticator: Authenticator::new(Arc::clone(&store), tracker, hasher),
            resolver: IdentityResolver::new(store, enabled_providers),
            issuer: SessionIssuer::new(),
            metrics: AuthMetrics::new(),
        }
    }

    pub fn issuer(&self) -> &SessionIssuer {
        &self.issuer
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Authenticate an attempt of any method and produce its session claims.
    pub async fn sign_in(&self, attempt: SignInAttempt) -> AuthErrorResult<SessionClaims> {
        let method = attempt.method();
        self.metrics.sign_in_attempted(method);

        let result = match attempt {
            SignInAttempt::Credentials(credentials) => {
                self.authenticator.authenticate(credentials).await
            }
            SignInAttempt::Federated { provider, profile } => self
                .resolver
                .resolve(provider, &profile)
                .await
                .map(|resolved| resolved.identity),
        };

        match result {
            Ok(identity) => {
                self.metrics.sign_in_succeeded(method);
                info!("Signed in {} via {}", identity.email, method);
                Ok(self.issuer.issue(&identity))
            }
            Err(e) => {
                self.metrics.sign_in_rejected(method, e.error_code());
                warn!("Sign-in via {} rejected: {}", method, e);
                Err(e)
            }
        }
    }
}
