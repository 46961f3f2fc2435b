use metrics::counter;

/// Counters for authentication decisions
#[derive(Debug, Clone)]
pub struct AuthMetrics {
    prefix: &'static str,
}

impl AuthMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "warden_auth",
        }
    }

    /// Record a sign-in attempt entering the service
    pub fn sign_in_attempted(&self, method: &str) {
        counter!(format!("{}.sign_in.attempts", self.prefix)).increment(1);
        counter!(format!("{}.sign_in.attempts.{}", self.prefix, method)).increment(1);
    }

    pub fn sign_in_succeeded(&self, method: &str) {
        counter!(format!("{}.sign_in.succeeded.{}", self.prefix, method)).increment(1);
    }

    /// Record a rejected sign-in by error code
    pub fn sign_in_rejected(&self, method: &str, code: &str) {
        counter!(format!("{}.sign_in.rejected.{}", self.prefix, method)).increment(1);
        counter!(format!("{}.sign_in.rejected.{}", self.prefix, code.to_lowercase()))
            .increment(1);
    }

    pub fn account_locked(&self) {
        counter!(format!("{}.lockouts.started", self.prefix)).increment(1);
    }

    pub fn lockout_expired(&self) {
        counter!(format!("{}.lockouts.expired", self.prefix)).increment(1);
    }

    /// Record a new identity, `origin` is "registered" or a provider name
    pub fn identity_created(&self, origin: &str) {
        counter!(format!("{}.identities.created", self.prefix)).increment(1);
        counter!(format!("{}.identities.created.{}", self.prefix, origin)).increment(1);
    }
}

impl Default for AuthMetrics {
    fn default() -> Self {
        Self::new()
    }
}
