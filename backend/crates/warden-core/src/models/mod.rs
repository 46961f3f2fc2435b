pub mod authenticated_identity;
pub mod federated_profile;
pub mod identity;
pub mod identity_update;
pub mod provider;
