//! Subcategories service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SubcategoriesServiceError {
    #[error("subcategory name is required")]
    MissingName,

    #[error("subcategory already exists")]
    AlreadyExists,

    #[error("subcategory not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for SubcategoriesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::Conflict => Self::AlreadyExists,
            other => Self::Store(other),
        }
    }
}
