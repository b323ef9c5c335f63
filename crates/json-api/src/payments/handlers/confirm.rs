//! Confirm Payment Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_app::domain::orders::OrdersServiceError;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::errors::into_api_error as order_into_api_error,
    payments::errors::gateway_into_api_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfirmPaymentResponse {
    pub payment_intent_id: String,
    pub status: String,
}

/// Confirm Payment Handler
///
/// Asks the gateway for the intent's current state. A succeeded intent
/// marks its order paid and reports `completed`; any other processor
/// status passes through raw.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ConfirmPaymentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let gateway = state
        .app
        .gateway
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Payment gateway is not configured"))?;

    let request: ConfirmPaymentRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid confirmation payload"))?;

    let intent = gateway
        .retrieve_payment_intent(&request.payment_intent_id)
        .await
        .map_err(gateway_into_api_error)?;

    let status = if intent.status == "succeeded" {
        match state.app.orders.complete_payment(&intent.id).await {
            Ok(_) => {}
            // Payment-link charges have no order to mark.
            Err(OrdersServiceError::NotFound) => {
                debug!("no order for payment intent {}", intent.id);
            }
            Err(error) => return Err(order_into_api_error(error)),
        }

        "completed".to_string()
    } else {
        intent.status
    };

    Ok(Json(ConfirmPaymentResponse {
        payment_intent_id: intent.id,
        status,
    }))
}
