use crate::error::Result as ServerErrorResult;

use warden_auth::{
    AuthService, CredentialHasher, LockoutPolicy, Registrar, SessionTokenCodec, SystemClock,
};
use warden_config::Config;
use warden_core::{IdentityStore, Provider};
use warden_db::IdentityRepository;

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;

/// Shared handles for every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<AuthService>,
    pub registrar: Arc<Registrar>,
    pub codec: Arc<SessionTokenCodec>,
    /// Key the OAuth callback must present. Federated sign-in is off when unset.
    pub federation_key: Option<Arc<str>>,
}

impl AppState {
    /// Wire the authentication engine. Fails when the auth section is invalid.
    pub fn new(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        Self::with_hasher(pool, config, CredentialHasher::new())
    }

    pub fn with_hasher(
        pool: SqlitePool,
        config: &Config,
        hasher: CredentialHasher,
    ) -> ServerErrorResult<Self> {
        config.auth.validate()?;

        let store: Arc<dyn IdentityStore> = Arc::new(IdentityRepository::new(pool.clone()));

        let policy = LockoutPolicy::new(
            config.auth.max_failed_attempts,
            Duration::minutes(config.auth.lockout_minutes),
        );

        let auth = AuthService::new(
            Arc::clone(&store),
            Arc::new(SystemClock),
            policy,
            hasher,
            enabled_providers(config),
        );

        let codec = SessionTokenCodec::with_hs256(
            config.auth.session_secret_bytes()?,
            Duration::seconds(config.auth.session_max_age_secs),
        );

        Ok(Self {
            pool,
            auth: Arc::new(auth),
            registrar: Arc::new(Registrar::new(store, hasher)),
            codec: Arc::new(codec),
            federation_key: config.auth.federation_key.as_deref().map(Arc::from),
        })
    }
}

/// Providers whose client registration is complete.
pub fn enabled_providers(config: &Config) -> Vec<Provider> {
    Provider::ALL
        .into_iter()
        .filter(|provider| match provider {
            Provider::Google => config.providers.google.is_enabled(),
            Provider::GitHub => config.providers.github.is_enabled(),
        })
        .collect()
}
