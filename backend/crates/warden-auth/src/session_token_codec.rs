use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use warden_core::ErrorLocation;

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// 30 days
pub const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

/// Seconds of clock skew tolerated when checking expiry
const LEEWAY_SECS: u64 = 30;

/// Session claims plus the token envelope timestamps.
#[derive(Debug, Serialize, Deserialize)]
struct SignedClaims {
    #[serde(flatten)]
    session: SessionClaims,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens (HS256 JWT).
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    max_age: Duration,
}

impl SessionTokenCodec {
    pub fn with_hs256(secret: &[u8], max_age: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            max_age,
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Sign `claims`, stamping `iat` now and `exp` at `iat + max_age`.
    #[track_caller]
    pub fn encode(&self, claims: &SessionClaims) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let signed = SignedClaims {
            session: claims.clone(),
            iat,
            exp: iat + self.max_age.num_seconds(),
        };

        encode(&Header::new(Algorithm::HS256), &signed, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, then validate the carried claims.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data = decode::<SignedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::InvalidToken {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.session.validate()?;

        Ok(token_data.claims.session)
    }
}
