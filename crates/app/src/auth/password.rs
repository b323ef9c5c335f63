//! Admin password hashing and verification.

use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

use crate::config::SecretString;

type HmacSha256 = Hmac<Sha256>;

const SALT_BYTES: usize = 16;

/// Salted digest of the shared admin password.
///
/// The plaintext is hashed at construction and not retained; `verify` runs a
/// constant-time comparison over the recomputed digest.
#[derive(Clone)]
pub struct AdminCredentials {
    salt: [u8; SALT_BYTES],
    digest: Vec<u8>,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(password: &SecretString) -> Self {
        let mut salt = [0_u8; SALT_BYTES];
        OsRng.fill_bytes(&mut salt);

        let digest = digest(&salt, password.expose());

        Self { salt, digest }
    }

    /// Check a login attempt against the stored digest.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        HmacSha256::new_from_slice(&self.salt).is_ok_and(|mut mac| {
            mac.update(candidate.as_bytes());
            mac.verify_slice(&self.digest).is_ok()
        })
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminCredentials(**redacted**)")
    }
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    HmacSha256::new_from_slice(salt).map_or_else(
        |_| Vec::new(),
        |mut mac| {
            mac.update(password.as_bytes());
            mac.finalize().into_bytes().to_vec()
        },
    )
}
