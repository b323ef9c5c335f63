//! Create Payment Link Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use storefront_app::domain::payment_links::models::NewPaymentLink;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, handlers::index::PaymentLinkResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreatePaymentLinkRequest {
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentLinkCreatedResponse {
    pub message: String,
    pub link: PaymentLinkResponse,
}

/// Create Payment Link Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentLinkCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: CreatePaymentLinkRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid payment link payload"))?;

    let link = state
        .app
        .payment_links
        .create(NewPaymentLink {
            name: request.name,
            description: request.description,
            amount: request.amount,
            currency: request.currency,
        })
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(PaymentLinkCreatedResponse {
        message: "Payment link created successfully".to_string(),
        link: link.into(),
    }))
}
