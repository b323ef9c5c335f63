//! Server configuration module

use clap::Parser;

use storefront_app::config::{AppConfig, SecretString};

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    stripe::StripeSettings,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod stripe;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Stripe gateway settings.
    #[command(flatten)]
    pub stripe: StripeSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Assemble the application-layer configuration.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database.database_url.clone(),
            connect_window: self.database.connect_window(),
            admin_password: SecretString::new(&self.auth.admin_password),
            token_secret: self
                .auth
                .token_secret
                .as_deref()
                .map(SecretString::new),
            token_ttl: AppConfig::DEFAULT_TOKEN_TTL,
            stripe: self.stripe.to_stripe_config(),
        }
    }
}
