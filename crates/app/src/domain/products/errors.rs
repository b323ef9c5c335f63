//! Products service errors.

use thiserror::Error;

use crate::{domain::products::models::MAX_IMAGES, store::StoreError};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product name is required")]
    MissingName,

    #[error("product price must not be negative")]
    InvalidPrice,

    #[error("a product carries at most {MAX_IMAGES} images")]
    TooManyImages,

    #[error("referenced subcategory does not exist")]
    UnknownSubcategory,

    #[error("subcategory belongs to a different category")]
    CategoryMismatch,

    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ProductsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}
