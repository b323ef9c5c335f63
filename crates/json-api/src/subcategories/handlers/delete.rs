//! Delete Subcategory Handler

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
pub(crate) struct SubcategoryDeletedResponse {
    pub message: String,
    pub subcategory: SubcategoryResponse,
}

/// Delete Subcategory Handler
///
/// Products referencing the subcategory are left pointing at a gone row;
/// their cached display name still renders.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SubcategoryDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid subcategory id"))?;

    let subcategory = state
        .app
        .subcategories
        .delete(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(SubcategoryDeletedResponse {
        message: "Subcategory deleted successfully".to_string(),
        subcategory: subcategory.into(),
    }))
}
