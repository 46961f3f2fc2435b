use crate::{IdentityUpdate, LockoutState, NewIdentity};

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_lockout_state_is_locked_only_before_deadline() {
    let now = Utc::now();
    let state = LockoutState {
        failed_attempts: 5,
        locked_until: Some(now + Duration::minutes(15)),
    };

    assert!(state.is_locked_at(now));
    assert!(!state.is_locked_at(now + Duration::minutes(15)));
    assert!(!LockoutState::cleared().is_locked_at(now));
}

#[test]
fn test_empty_update_is_empty() {
    assert!(IdentityUpdate::default().is_empty());
    assert!(!IdentityUpdate::lockout(LockoutState::cleared()).is_empty());
}

#[test]
fn test_apply_writes_lockout_pair_together() {
    let mut identity = NewIdentity::federated("a@x.com".to_string(), "A".to_string(), None)
        .into_identity(Uuid::new_v4(), Utc::now());
    identity.failed_attempts = 5;
    identity.locked_until = Some(Utc::now());

    let later = Utc::now() + Duration::seconds(1);
    IdentityUpdate::lockout(LockoutState::cleared()).apply_to(&mut identity, later);

    assert_eq!(identity.failed_attempts, 0);
    assert_eq!(identity.locked_until, None);
    assert_eq!(identity.updated_at, later);
    assert_eq!(identity.name.as_deref(), Some("A"));
}

#[test]
fn test_apply_leaves_unset_fields_untouched() {
    let mut identity = NewIdentity::federated(
        "a@x.com".to_string(),
        "A".to_string(),
        Some("https://old".to_string()),
    )
    .into_identity(Uuid::new_v4(), Utc::now());

    let update = IdentityUpdate {
        name: Some("B".to_string()),
        ..IdentityUpdate::default()
    };
    update.apply_to(&mut identity, Utc::now());

    assert_eq!(identity.name.as_deref(), Some("B"));
    assert_eq!(identity.image.as_deref(), Some("https://old"));
    assert_eq!(identity.failed_attempts, 0);
}
