//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{
    errors::AuthServiceError, password::AdminCredentials, token::{Claims, TokenSigner},
};

#[derive(Debug, Clone)]
pub struct DefaultAuthService {
    credentials: AdminCredentials,
    signer: Arc<TokenSigner>,
}

impl DefaultAuthService {
    #[must_use]
    pub fn new(credentials: AdminCredentials, signer: TokenSigner) -> Self {
        Self {
            credentials,
            signer: Arc::new(signer),
        }
    }
}

#[async_trait]
impl AuthService for DefaultAuthService {
    async fn login(&self, password: &str) -> Result<String, AuthServiceError> {
        if !self.credentials.verify(password) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.signer.issue()
    }

    async fn authenticate(&self, token: &str) -> Result<Claims, AuthServiceError> {
        self.signer.verify(token)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange the shared admin password for a session token.
    async fn login(&self, password: &str) -> Result<String, AuthServiceError>;

    /// Validate a session token and return its claims.
    async fn authenticate(&self, token: &str) -> Result<Claims, AuthServiceError>;
}
