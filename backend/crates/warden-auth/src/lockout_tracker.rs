//! Per-identity failed-login state machine.
//!
//! An identity is either unlocked with `0..max_attempts` recorded failures or
//! locked until a deadline. Expiry is observed lazily: the first `is_locked`
//! call after the deadline clears the lock and the counter. There is no
//! background timer.

use crate::{AuthMetrics, Clock, LockoutPolicy, Result as AuthErrorResult};

use warden_core::{IdentityStore, IdentityUpdate, LockoutState};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct LockoutTracker {
    store: Arc<dyn IdentityStore>,
    clock: Arc<dyn Clock>,
    policy: LockoutPolicy,
    metrics: AuthMetrics,
}

impl LockoutTracker {
    pub fn new(store: Arc<dyn IdentityStore>, clock: Arc<dyn Clock>, policy: LockoutPolicy) -> Self {
        Self {
            store,
            clock,
            policy,
            metrics: AuthMetrics::new(),
        }
    }

    pub fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }

    /// Whether credential sign-in for `email` is currently refused.
    ///
    /// Unknown emails are never locked. An elapsed lock is cleared here.
    pub async fn is_locked(&self, email: &str) -> AuthErrorResult<bool> {
        let Some(identity) = self.store.find_by_email(email).await? else {
            return Ok(false);
        };

        let Some(locked_until) = identity.locked_until else {
            return Ok(false);
        };

        if self.clock.now() < locked_until {
            debug!("Identity {} is locked until {}", email, locked_until);
            return Ok(true);
        }

        self.store
            .update(email, IdentityUpdate::lockout(LockoutState::cleared()))
            .await?;
        self.metrics.lockout_expired();
        info!("Lockout expired for {}", email);

        Ok(false)
    }

    /// Count one failed credential check. Unknown emails are ignored.
    pub async fn record_failure(&self, email: &str) -> AuthErrorResult<()> {
        let Some(identity) = self.store.find_by_email(email).await? else {
            return Ok(());
        };

        let now = self.clock.now();
        let next = self.policy.after_failure(identity.lockout_state(), now);

        self.store
            .update(email, IdentityUpdate::lockout(next))
            .await?;

        if next.is_locked_at(now) && !identity.lockout_state().is_locked_at(now) {
            self.metrics.account_locked();
            warn!(
                "Identity {} locked after {} failed attempts (until {:?})",
                email, next.failed_attempts, next.locked_until
            );
        } else {
            debug!(
                "Failed attempt {} of {} for {}",
                next.failed_attempts, self.policy.max_attempts, email
            );
        }

        Ok(())
    }

    /// Reset the counter and clear any lock.
    pub async fn record_success(&self, email: &str) -> AuthErrorResult<()> {
        self.store
            .update(email, IdentityUpdate::lockout(LockoutState::cleared()))
            .await?;
        Ok(())
    }
}
