use crate::tests::{EnvGuard, setup_valid_env};
use crate::{Config, ProviderConfig};

use serial_test::serial;

#[test]
fn test_provider_enabled_only_with_both_halves() {
    let both = ProviderConfig {
        client_id: Some("id".to_string()),
        client_secret: Some("secret".to_string()),
    };
    let id_only = ProviderConfig {
        client_id: Some("id".to_string()),
        client_secret: None,
    };
    let empty_secret = ProviderConfig {
        client_id: Some("id".to_string()),
        client_secret: Some(String::new()),
    };

    assert!(both.is_enabled());
    assert!(!id_only.is_enabled());
    assert!(!empty_secret.is_enabled());
    assert!(!ProviderConfig::default().is_enabled());
}

#[test]
#[serial]
fn test_provider_env_overrides() {
    let (_temp, _guards) = setup_valid_env();
    let _id = EnvGuard::set("WARDEN_GOOGLE_CLIENT_ID", "google-id");
    let _secret = EnvGuard::set("WARDEN_GOOGLE_CLIENT_SECRET", "google-secret");

    let config = Config::load().unwrap();

    assert!(config.providers.google.is_enabled());
    assert!(!config.providers.github.is_enabled());
    assert!(config.validate().is_ok());
}

#[test]
fn test_provider_debug_redacts_secret() {
    let provider = ProviderConfig {
        client_id: Some("visible-id".to_string()),
        client_secret: Some("hidden-secret".to_string()),
    };

    let rendered = format!("{:?}", provider);

    assert!(rendered.contains("visible-id"));
    assert!(!rendered.contains("hidden-secret"));
}
