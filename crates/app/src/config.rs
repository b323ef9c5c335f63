//! Application configuration.
//!
//! Built once at startup by the binary and handed to
//! [`AppContext::init`](crate::context::AppContext::init). Nothing in this
//! crate reads ambient environment state.

use std::{fmt, time::Duration};

use zeroize::Zeroize;

use crate::payments::StripeConfig;

/// Secret string that never appears in `Debug` output.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(**redacted**)")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Everything the application context needs to assemble its services.
#[derive(Debug)]
pub struct AppConfig {
    /// Postgres connection string. When absent, the in-memory store backend
    /// is used.
    pub database_url: Option<String>,

    /// How long a database connection attempt may take before the context
    /// falls back to the in-memory backend.
    pub connect_window: Duration,

    /// Shared admin secret checked by the login endpoint.
    pub admin_password: SecretString,

    /// Key used to sign admin session tokens. A random key is generated at
    /// startup when absent, which invalidates outstanding sessions on
    /// restart.
    pub token_secret: Option<SecretString>,

    /// Session token lifetime.
    pub token_ttl: Duration,

    /// Payment processor credentials.
    pub stripe: StripeConfig,
}

impl AppConfig {
    /// Default window for the initial database connection attempt.
    pub const DEFAULT_CONNECT_WINDOW: Duration = Duration::from_secs(5);

    /// Default admin session lifetime.
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);
}
