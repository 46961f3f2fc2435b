use crate::CredentialsAttempt;

use warden_core::{FederatedProfile, Provider};

/// One sign-in request, tagged by method.
#[derive(Debug, Clone)]
pub enum SignInAttempt {
    Credentials(CredentialsAttempt),
    Federated {
        provider: Provider,
        profile: FederatedProfile,
    },
}

impl SignInAttempt {
    /// Label used in logs and metrics
    pub fn method(&self) -> &'static str {
        match self {
            Self::Credentials(_) => "credentials",
            Self::Federated { provider, .. } => provider.as_str(),
        }
    }
}
