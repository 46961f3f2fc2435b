use warden_core::NewIdentity;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    warden_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn registered_identity(email: &str) -> NewIdentity {
    NewIdentity::registered(
        email.to_string(),
        "Test User".to_string(),
        "$2b$04$abcdefghijklmnopqrstuuSomeHashValueForTestsOnly12345".to_string(),
    )
}

pub fn federated_identity(email: &str) -> NewIdentity {
    NewIdentity::federated(email.to_string(), "Octo Cat".to_string(), None)
}
