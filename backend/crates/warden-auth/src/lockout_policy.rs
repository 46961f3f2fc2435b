use warden_core::LockoutState;

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_LOCKOUT_MINUTES: i64 = 15;

/// Rules for counting failed credential checks and locking an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Consecutive failures that trigger a lock
    pub max_attempts: u32,
    pub lockout_duration: Duration,
}

impl Default for LockoutPolicy {
    /// 5 failed attempts, 15 minute lockout
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lockout_duration: Duration::minutes(DEFAULT_LOCKOUT_MINUTES),
        }
    }
}

impl LockoutPolicy {
    pub fn new(max_attempts: u32, lockout_duration: Duration) -> Self {
        Self {
            max_attempts,
            lockout_duration,
        }
    }

    /// Lockout length in whole minutes, rounded up.
    pub fn lockout_minutes(&self) -> i64 {
        let secs = self.lockout_duration.num_seconds();
        (secs + 59) / 60
    }

    /// State after one more failed check at `now`. Below the threshold no
    /// deadline is kept.
    pub fn after_failure(&self, current: LockoutState, now: DateTime<Utc>) -> LockoutState {
        let failed_attempts = current.failed_attempts.saturating_add(1);
        let locked_until = if failed_attempts >= self.max_attempts {
            Some(now + self.lockout_duration)
        } else {
            None
        };

        LockoutState {
            failed_attempts,
            locked_until,
        }
    }
}
