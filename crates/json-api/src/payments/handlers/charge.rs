//! Charge Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, payments::errors::gateway_into_api_error, state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChargeRequest {
    pub amount: Decimal,
    /// Cart lines; only the count is forwarded to the gateway.
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChargeResponse {
    pub client_secret: Option<String>,
    pub payment_intent_id: String,
    /// Amount in the currency's minor unit, as charged.
    pub amount: i64,
    pub status: String,
}

/// Charge Handler
///
/// Opens a payment intent with the gateway for the checkout flow. The
/// client finishes the charge with the returned secret.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ChargeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let gateway = state
        .app
        .gateway
        .as_ref()
        .ok_or_else(|| ApiError::bad_request("Payment gateway is not configured"))?;

    let request: ChargeRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid charge payload"))?;

    let intent = gateway
        .create_payment_intent(request.amount, request.items.len())
        .await
        .map_err(gateway_into_api_error)?;

    Ok(Json(ChargeResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
        amount: intent.amount,
        status: intent.status,
    }))
}
