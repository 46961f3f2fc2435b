use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOCKOUT_MINUTES, DEFAULT_MAX_FAILED_ATTEMPTS,
    DEFAULT_SESSION_MAX_AGE_SECS, MAX_LOCKOUT_MINUTES, MAX_MAX_FAILED_ATTEMPTS,
    MAX_SESSION_MAX_AGE_SECS, MIN_LOCKOUT_MINUTES, MIN_MAX_FAILED_ATTEMPTS, MIN_SECRET_LENGTH,
    MIN_SESSION_MAX_AGE_SECS,
};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub session_secret: Option<String>,
    pub session_max_age_secs: i64,
    /// Consecutive credential failures before an account is locked
    pub max_failed_attempts: u32,
    pub lockout_minutes: i64,
    /// Shared key the OAuth callback presents on federated sign-in
    pub federation_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: None,
            session_max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            lockout_minutes: DEFAULT_LOCKOUT_MINUTES,
            federation_key: None,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "session_secret",
                &self.session_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("session_max_age_secs", &self.session_max_age_secs)
            .field("max_failed_attempts", &self.max_failed_attempts)
            .field("lockout_minutes", &self.lockout_minutes)
            .field(
                "federation_key",
                &self.federation_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.session_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.session_secret is required (set WARDEN_AUTH_SESSION_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.session_secret must be at least {} characters",
                    MIN_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if let Some(key) = &self.federation_key
            && key.len() < MIN_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.federation_key must be at least {} characters",
                MIN_SECRET_LENGTH
            )));
        }

        if !(MIN_SESSION_MAX_AGE_SECS..=MAX_SESSION_MAX_AGE_SECS).contains(&self.session_max_age_secs)
        {
            return Err(ConfigError::auth(format!(
                "auth.session_max_age_secs must be {}-{}, got {}",
                MIN_SESSION_MAX_AGE_SECS, MAX_SESSION_MAX_AGE_SECS, self.session_max_age_secs
            )));
        }

        if !(MIN_MAX_FAILED_ATTEMPTS..=MAX_MAX_FAILED_ATTEMPTS).contains(&self.max_failed_attempts) {
            return Err(ConfigError::auth(format!(
                "auth.max_failed_attempts must be {}-{}, got {}",
                MIN_MAX_FAILED_ATTEMPTS, MAX_MAX_FAILED_ATTEMPTS, self.max_failed_attempts
            )));
        }

        if !(MIN_LOCKOUT_MINUTES..=MAX_LOCKOUT_MINUTES).contains(&self.lockout_minutes) {
            return Err(ConfigError::auth(format!(
                "auth.lockout_minutes must be {}-{}, got {}",
                MIN_LOCKOUT_MINUTES, MAX_LOCKOUT_MINUTES, self.lockout_minutes
            )));
        }

        Ok(())
    }

    /// Secret bytes for token signing. Refuses an unset or empty secret.
    #[track_caller]
    pub fn session_secret_bytes(&self) -> ConfigErrorResult<&[u8]> {
        match self.session_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret.as_bytes()),
            _ => Err(ConfigError::auth(
                "auth.session_secret is required (set WARDEN_AUTH_SESSION_SECRET)",
            )),
        }
    }
}
