//! Subcategory Errors

use tracing::error;

use storefront_app::domain::subcategories::SubcategoriesServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: SubcategoriesServiceError) -> ApiError {
    match error {
        SubcategoriesServiceError::MissingName => ApiError::bad_request(error.to_string()),
        SubcategoriesServiceError::AlreadyExists => {
            ApiError::bad_request("Subcategory already exists in this category")
        }
        SubcategoriesServiceError::NotFound => ApiError::not_found("Subcategory not found"),
        SubcategoriesServiceError::Store(source) => {
            error!("subcategory store failure: {source}");

            ApiError::internal()
        }
    }
}
