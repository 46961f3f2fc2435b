#[allow(clippy::module_inception)]
pub mod auth;
pub mod federated_sign_in_request;
pub mod register_response;
pub mod session_response;
