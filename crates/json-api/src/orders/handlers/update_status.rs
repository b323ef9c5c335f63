//! Update Order Status Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::FulfillmentStatus;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    pub status: FulfillmentStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderUpdatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

/// Update Order Status Handler
///
/// Transitions are unrestricted so staff can correct mistakes.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid order id"))?;

    let request: UpdateStatusRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid order status"))?;

    let order = state
        .app
        .orders
        .update_status(uuid.into(), request.status)
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrderUpdatedResponse {
        message: "Order updated successfully".to_string(),
        order: order.into(),
    }))
}
