//! Order Errors

use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::MissingCustomer
        | OrdersServiceError::EmptyItems
        | OrdersServiceError::InvalidQuantity
        | OrdersServiceError::InvalidCardDigits
        | OrdersServiceError::TotalMismatch => ApiError::bad_request(error.to_string()),
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::Store(source) => {
            error!("order store failure: {source}");

            ApiError::internal()
        }
    }
}
