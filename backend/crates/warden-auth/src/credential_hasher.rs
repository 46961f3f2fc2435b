use crate::{AuthError, Result as AuthErrorResult};

use warden_core::ErrorLocation;

use std::panic::Location;

use log::{debug, error};

/// bcrypt work factor used for every stored password.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Salted one-way hashing of passwords with bcrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }

    /// Hasher with a non-default work factor. bcrypt accepts 4..=31.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh random salt embedded in the output.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Constant-time check of `plaintext` against a stored hash.
    /// A malformed hash is a mismatch, not an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                debug!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool.
    pub async fn hash_on_blocking_pool(&self, plaintext: String) -> AuthErrorResult<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    /// [`verify`](Self::verify) on the blocking thread pool.
    pub async fn verify_on_blocking_pool(&self, plaintext: String, hash: String) -> bool {
        let hasher = *self;
        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
