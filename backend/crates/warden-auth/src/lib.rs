pub mod auth_service;
pub mod authenticator;
pub mod clock;
pub mod credential_hasher;
pub mod error;
pub mod identity_resolver;
pub mod lockout_policy;
pub mod lockout_tracker;
pub mod metrics;
pub mod registrar;
pub mod session_claims;
pub mod session_issuer;
pub mod session_token_codec;
pub mod session_view;
pub mod sign_in_attempt;

pub use auth_service::AuthService;
pub use authenticator::{Authenticator, CredentialsAttempt};
pub use clock::{Clock, SystemClock};
pub use credential_hasher::{CredentialHasher, DEFAULT_HASH_COST};
pub use error::{AuthError, Result};
pub use identity_resolver::{IdentityResolver, ResolvedIdentity};
pub use lockout_policy::LockoutPolicy;
pub use lockout_tracker::LockoutTracker;
pub use metrics::AuthMetrics;
pub use registrar::{MIN_PASSWORD_LENGTH, Registrar, RegistrationRequest};
pub use session_claims::SessionClaims;
pub use session_issuer::SessionIssuer;
pub use session_token_codec::{DEFAULT_SESSION_MAX_AGE_SECS, SessionTokenCodec};
pub use session_view::{SessionUser, SessionView};
pub use sign_in_attempt::SignInAttempt;

#[cfg(test)]
mod tests;
