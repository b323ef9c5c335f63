//! Shared persistence adapter error taxonomy.

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

/// Failure signalled by a store adapter.
///
/// Adapters report missing rows as [`StoreError::NotFound`] rather than
/// surfacing a backend-specific error, so services can translate them
/// uniformly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    Conflict,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict,
            _ => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let mapped = StoreError::from(sqlx::Error::RowNotFound);

        assert!(matches!(mapped, StoreError::NotFound), "got {mapped:?}");
    }
}
