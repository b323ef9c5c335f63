//! Storefront JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Active store backend
    pub database: String,
    /// Gateway configuration state
    pub stripe: String,
}

/// Healthcheck handler
///
/// Reports the active store backend and whether the payment gateway is
/// configured.
#[salvo::handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stripe = if state.app.gateway.is_some() {
        "configured"
    } else {
        "not configured"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: state.app.backend.to_string(),
        stripe: stripe.to_string(),
    }))
}
