use crate::NewIdentity;

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_new_federated_identity_when_materialized_then_counters_start_at_zero() {
    // Given
    let new_identity = NewIdentity::federated(
        "octo@example.com".to_string(),
        "Octo".to_string(),
        Some("https://avatars.example.com/octo.png".to_string()),
    );
    let now = Utc::now();

    // When
    let identity = new_identity.into_identity(Uuid::new_v4(), now);

    // Then
    assert_that!(identity.failed_attempts, eq(0));
    assert_that!(identity.locked_until, none());
    assert_that!(identity.has_password(), eq(false));
    assert_that!(identity.created_at, eq(now));
}

#[test]
fn given_registered_identity_when_checked_then_has_password() {
    let identity = NewIdentity::registered(
        "a@x.com".to_string(),
        "A".to_string(),
        "$2b$10$abcdefghijklmnopqrstuu".to_string(),
    )
    .into_identity(Uuid::new_v4(), Utc::now());

    assert_that!(identity.has_password(), eq(true));
}

#[test]
fn given_empty_password_hash_when_checked_then_has_no_password() {
    let mut identity = NewIdentity::registered(
        "a@x.com".to_string(),
        "A".to_string(),
        String::new(),
    )
    .into_identity(Uuid::new_v4(), Utc::now());

    assert_that!(identity.has_password(), eq(false));

    identity.password_hash = None;
    assert_that!(identity.has_password(), eq(false));
}

#[test]
fn given_identity_when_debug_formatted_then_password_hash_is_redacted() {
    let identity = NewIdentity::registered(
        "a@x.com".to_string(),
        "A".to_string(),
        "$2b$10$secretsecretsecret".to_string(),
    )
    .into_identity(Uuid::new_v4(), Utc::now());

    let rendered = format!("{:?}", identity);

    assert_that!(rendered, not(contains_substring("secretsecret")));
    assert_that!(rendered, contains_substring("<redacted>"));
}

#[test]
fn given_identity_when_converted_to_authenticated_then_copies_public_fields() {
    let mut identity = NewIdentity::federated(
        "a@x.com".to_string(),
        "A".to_string(),
        Some("https://img".to_string()),
    )
    .into_identity(Uuid::new_v4(), Utc::now());
    identity.failed_attempts = 3;
    identity.locked_until = Some(Utc::now() + Duration::minutes(5));

    let public = identity.to_authenticated();

    assert_that!(public.id, eq(identity.id));
    assert_that!(public.email, eq("a@x.com"));
    assert_that!(public.name, some(eq("A")));
    assert_that!(public.image, some(eq("https://img")));
}
