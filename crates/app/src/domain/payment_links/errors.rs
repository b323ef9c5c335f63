//! Payment links service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum PaymentLinksServiceError {
    #[error("payment link name is required")]
    MissingName,

    #[error("payment link amount must be greater than zero")]
    InvalidAmount,

    #[error("payment link not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for PaymentLinksServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}
