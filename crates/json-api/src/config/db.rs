//! Database Config

use std::time::Duration;

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string. Omit to run on in-memory stores.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Seconds to wait for the initial database connection before falling
    /// back to in-memory stores
    #[arg(long, env = "DATABASE_CONNECT_WINDOW_SECONDS", default_value_t = 5)]
    pub connect_window_seconds: u64,
}

impl DatabaseConfig {
    #[must_use]
    pub fn connect_window(&self) -> Duration {
        Duration::from_secs(self.connect_window_seconds)
    }
}
