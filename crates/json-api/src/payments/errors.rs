//! Payment Errors

use tracing::error;

use storefront_app::{
    domain::payment_links::PaymentLinksServiceError, payments::PaymentGatewayError,
};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: PaymentLinksServiceError) -> ApiError {
    match error {
        PaymentLinksServiceError::MissingName | PaymentLinksServiceError::InvalidAmount => {
            ApiError::bad_request(error.to_string())
        }
        PaymentLinksServiceError::NotFound => ApiError::not_found("Payment link not found"),
        PaymentLinksServiceError::Store(source) => {
            error!("payment link store failure: {source}");

            ApiError::internal()
        }
    }
}

pub(crate) fn gateway_into_api_error(error: PaymentGatewayError) -> ApiError {
    match error {
        PaymentGatewayError::NotConfigured => {
            ApiError::bad_request("Payment gateway is not configured")
        }
        PaymentGatewayError::InvalidAmount | PaymentGatewayError::InvalidSignature => {
            ApiError::bad_request(error.to_string())
        }
        PaymentGatewayError::Http(source) => {
            error!("payment gateway request failed: {source}");

            ApiError::bad_gateway("Payment gateway is unavailable")
        }
        PaymentGatewayError::Rejected(message) => {
            error!("payment gateway rejected request: {message}");

            ApiError::bad_gateway("Payment gateway rejected the request")
        }
    }
}
