pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::authenticated_identity::AuthenticatedIdentity;
pub use models::federated_profile::FederatedProfile;
pub use models::identity::{Identity, NewIdentity};
pub use models::identity_update::{IdentityUpdate, LockoutState};
pub use models::provider::Provider;
pub use store::identity_store::IdentityStore;
pub use store::store_error::{StoreError, StoreResult};

#[cfg(test)]
mod tests;
