use crate::Provider;

use std::str::FromStr;

#[test]
fn test_provider_as_str() {
    assert_eq!(Provider::Google.as_str(), "google");
    assert_eq!(Provider::GitHub.as_str(), "github");
}

#[test]
fn test_provider_from_str() {
    assert_eq!(Provider::from_str("google").unwrap(), Provider::Google);
    assert_eq!(Provider::from_str("github").unwrap(), Provider::GitHub);
    assert!(Provider::from_str("GitHub").is_err());
    assert!(Provider::from_str("credentials").is_err());
}

#[test]
fn test_provider_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Provider::GitHub).unwrap();
    assert_eq!(json, "\"github\"");

    let parsed: Provider = serde_json::from_str("\"google\"").unwrap();
    assert_eq!(parsed, Provider::Google);
}

#[test]
fn test_only_github_has_noreply_fallback_domain() {
    assert_eq!(Provider::GitHub.fallback_email_domain(), Some("github.com"));
    assert_eq!(Provider::Google.fallback_email_domain(), None);
}
