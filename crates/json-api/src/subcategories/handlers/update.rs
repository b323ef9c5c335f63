//! Rename Subcategory Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    subcategories::{errors::into_api_error, handlers::index::SubcategoryResponse},
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RenameSubcategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SubcategoryUpdatedResponse {
    pub message: String,
    pub subcategory: SubcategoryResponse,
}

/// Rename Subcategory Handler
///
/// Products referencing the subcategory keep their cached display name.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SubcategoryUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid subcategory id"))?;

    let request: RenameSubcategoryRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid subcategory payload"))?;

    let subcategory = state
        .app
        .subcategories
        .rename(uuid.into(), request.name)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SubcategoryUpdatedResponse {
        message: "Subcategory updated successfully".to_string(),
        subcategory: subcategory.into(),
    }))
}
