//! Database connection management

use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database connection attempt exceeded {0:?}")]
    Timeout(Duration),

    #[error("failed to connect to database")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to Postgres within a bounded window and bring the schema up to
/// date.
///
/// # Errors
///
/// Returns an error when the attempt exceeds `window`, the connection is
/// refused, or a migration fails.
pub async fn connect(database_url: &str, window: Duration) -> Result<PgPool, DatabaseError> {
    let pool = tokio::time::timeout(window, PgPool::connect(database_url))
        .await
        .map_err(|_elapsed| DatabaseError::Timeout(window))?
        .map_err(DatabaseError::Connect)?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
