use std::fmt;

use log::{info, warn};
use serde::Deserialize;

/// OAuth client registration for one identity provider.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ProviderConfig {
    /// Both halves of the client registration are present.
    pub fn is_enabled(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.client_id) && present(&self.client_secret)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub google: ProviderConfig,
    pub github: ProviderConfig,
}

impl ProvidersConfig {
    pub fn log_summary(&self) {
        info!(
            "  providers: google={}, github={}",
            enabled_label(&self.google),
            enabled_label(&self.github)
        );

        if !self.github.is_enabled() {
            warn!("GitHub sign-in disabled: providers.github client_id/client_secret not set");
        }
    }
}

fn enabled_label(provider: &ProviderConfig) -> &'static str {
    if provider.is_enabled() {
        "enabled"
    } else {
        "disabled"
    }
}
