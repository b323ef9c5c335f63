//! Product Errors

use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::MissingName
        | ProductsServiceError::InvalidPrice
        | ProductsServiceError::TooManyImages
        | ProductsServiceError::UnknownSubcategory
        | ProductsServiceError::CategoryMismatch => ApiError::bad_request(error.to_string()),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::Store(source) => {
            error!("product store failure: {source}");

            ApiError::internal()
        }
    }
}
