pub mod bearer_token;
pub mod federation_caller;
