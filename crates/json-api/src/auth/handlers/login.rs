//! Admin Login Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{auth::errors::into_api_error, errors::ApiError, extensions::*, state::State};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
    pub message: String,
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body: LoginRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid login payload"))?;

    let token = state
        .app
        .auth
        .login(&body.password)
        .await
        .map_err(into_api_error)?;

    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}
