use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::error::AppError;

/// Access token claims: the subject's email and a Unix-seconds expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
}

/// Verification failures the rest of the system distinguishes.
///
/// Expiry gets its own variant because it maps to a different 401 message
/// than every other defect (bad signature, malformed payload, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("token is invalid")]
    Invalid,
}

/// HS256 token signer/verifier over a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock skew allowance: an expired token must be reported as
        // expired the second it lapses.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    /// Issue a token for an authenticated subject. `exp` = now + TTL.
    pub fn issue(&self, email: &str) -> Result<IssuedToken, AppError> {
        let exp = chrono::Utc::now().timestamp() + self.ttl_seconds as i64;
        let claims = Claims {
            email: email.to_string(),
            exp,
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!(error = %e, "failed to sign JWT");
                AppError::internal()
            })?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_seconds,
        })
    }

    /// Verify signature and expiry, and decode the claims.
    ///
    /// `jsonwebtoken::Validation` checks the signature and `exp`; the only
    /// contract here is keeping `Expired` distinct from every other failure.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        Ok(data.claims)
    }
}
