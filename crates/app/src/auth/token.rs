//! Session token signing and verification.

use std::time::Duration;

use jiff::Timestamp;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use rand::{RngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};

use crate::{auth::errors::AuthServiceError, config::SecretString};

/// Number of random bytes in a generated signing key.
const GENERATED_SECRET_BYTES: usize = 32;

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub is_admin: bool,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signer for admin session tokens.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    /// Build a signer from a configured secret, or from a fresh random key
    /// when none is set. A random key invalidates all outstanding sessions
    /// on restart.
    #[must_use]
    pub fn new(secret: Option<&SecretString>, ttl: Duration) -> Self {
        let key = match secret {
            Some(secret) => secret.expose().as_bytes().to_vec(),
            None => {
                let mut bytes = vec![0_u8; GENERATED_SECRET_BYTES];
                OsRng.fill_bytes(&mut bytes);
                bytes
            }
        };

        Self {
            encoding: EncodingKey::from_secret(&key),
            decoding: DecodingKey::from_secret(&key),
            ttl,
        }
    }

    /// Issue a signed admin session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Signing`] if encoding fails.
    pub fn issue(&self) -> Result<String, AuthServiceError> {
        let now = Timestamp::now().as_second();

        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let claims = Claims {
            is_admin: true,
            iat: now,
            exp: now.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthServiceError::Signing)
    }

    /// Verify a token's signature and expiry.
    ///
    /// The `is_admin` claim is returned to the caller; route guards decide
    /// what it grants.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidToken`] for any failure: bad
    /// signature, expired, or malformed.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew grace window; `exp` is a hard cutoff.
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AuthServiceError::InvalidToken)?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}
