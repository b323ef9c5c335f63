//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::get::OrderResponse},
    state::State,
};

/// Order Index Handler
///
/// Admin-only; newest orders first.
#[salvo::handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state.app.orders.list().await.map_err(into_api_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
