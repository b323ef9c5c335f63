//! Auth Config

use clap::Args;

/// Admin authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared admin password for the back office
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Session token signing secret. A random key is generated when omitted,
    /// invalidating sessions on restart.
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,
}
