//! Stripe Config

use clap::Args;

use storefront_app::{config::SecretString, payments::StripeConfig};

/// Stripe gateway settings. Both keys are optional; without a secret key
/// payment operations are disabled.
#[derive(Debug, Args)]
pub struct StripeSettings {
    /// Stripe secret API key
    #[arg(long, env = "STRIPE_SECRET_KEY", hide_env_values = true)]
    pub stripe_secret_key: Option<String>,

    /// Stripe webhook signing secret
    #[arg(long, env = "STRIPE_WEBHOOK_SECRET", hide_env_values = true)]
    pub stripe_webhook_secret: Option<String>,
}

impl StripeSettings {
    #[must_use]
    pub fn to_stripe_config(&self) -> StripeConfig {
        StripeConfig {
            secret_key: self.stripe_secret_key.as_deref().map(SecretString::new),
            webhook_secret: self
                .stripe_webhook_secret
                .as_deref()
                .map(SecretString::new),
        }
    }
}
