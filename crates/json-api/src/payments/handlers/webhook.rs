//! Stripe Webhook Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use storefront_app::domain::orders::OrdersServiceError;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::errors::into_api_error as order_into_api_error,
    payments::errors::gateway_into_api_error,
    state::State,
};

#[derive(Debug, Deserialize)]
struct WebhookEvent {
    #[serde(rename = "type")]
    kind: String,
    data: WebhookData,
}

#[derive(Debug, Deserialize)]
struct WebhookData {
    object: WebhookObject,
}

#[derive(Debug, Deserialize)]
struct WebhookObject {
    id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WebhookResponse {
    pub received: bool,
}

/// Stripe Webhook Handler
///
/// Verifies the `stripe-signature` header against the raw body before
/// acting on the event. Unverified payloads are rejected and never applied.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<WebhookResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let gateway = state
        .app
        .gateway
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Payment gateway is not configured"))?;

    let signature: String = req
        .header("stripe-signature")
        .ok_or_else(|| ApiError::bad_request("Missing stripe-signature header"))?;

    let payload = req
        .payload()
        .await
        .map_err(|_| ApiError::bad_request("Invalid webhook payload"))?;

    gateway
        .verify_webhook_signature(payload, &signature)
        .map_err(gateway_into_api_error)?;

    let event: WebhookEvent = serde_json::from_slice(payload)
        .map_err(|_| ApiError::bad_request("Invalid webhook payload"))?;

    let result = match event.kind.as_str() {
        "payment_intent.succeeded" => {
            info!("payment intent {} succeeded", event.data.object.id);
            state.app.orders.complete_payment(&event.data.object.id).await
        }
        "payment_intent.payment_failed" => {
            info!("payment intent {} failed", event.data.object.id);
            state.app.orders.fail_payment(&event.data.object.id).await
        }
        other => {
            debug!("ignoring webhook event {other}");
            return Ok(Json(WebhookResponse { received: true }));
        }
    };

    match result {
        Ok(_) => {}
        // Payment-link charges have no order to mark.
        Err(OrdersServiceError::NotFound) => {
            debug!("no order for payment intent {}", event.data.object.id);
        }
        Err(error) => return Err(order_into_api_error(error)),
    }

    Ok(Json(WebhookResponse { received: true }))
}
