//! Identity store contract.
//!
//! The authentication engine never talks to a database directly. It is handed
//! an `Arc<dyn IdentityStore>` at construction time and relies on the store for
//! two guarantees only:
//!
//! - `create` enforces email uniqueness and reports a violation as
//!   [`StoreError::Duplicate`].
//! - a single `update` call writes its whole field set atomically for one row.
//!
//! There are no cross-call transactions. Two concurrent read-modify-write
//! sequences on the same identity may lose one write.

use crate::{Identity, IdentityUpdate, NewIdentity, StoreResult};

use async_trait::async_trait;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up an identity by its exact email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    /// Insert a new identity with zeroed lockout counters.
    async fn create(&self, new_identity: NewIdentity) -> StoreResult<Identity>;

    /// Apply a partial update. Fails with `NotFound` if no identity has `email`.
    async fn update(&self, email: &str, update: IdentityUpdate) -> StoreResult<Identity>;
}
