pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{federated_sign_in, login, register, session},
        federated_sign_in_request::FederatedSignInRequest,
        register_response::RegisterResponse,
        session_response::{SessionResponse, SignInResponse},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        bearer_token::BearerToken,
        federation_caller::{FEDERATION_KEY_HEADER, FederationCaller},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
