//! Orders service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("customer name is required")]
    MissingCustomer,

    #[error("an order needs at least one item")]
    EmptyItems,

    #[error("item quantities must be greater than zero")]
    InvalidQuantity,

    #[error("card last4 must be exactly four digits")]
    InvalidCardDigits,

    #[error("claimed order total does not match the line items")]
    TotalMismatch,

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}
