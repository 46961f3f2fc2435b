pub mod identity_store;
pub mod store_error;
