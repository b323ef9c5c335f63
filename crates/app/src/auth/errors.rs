//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired session token")]
    InvalidToken,

    #[error("failed to sign session token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
