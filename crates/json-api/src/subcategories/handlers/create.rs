//! Create Subcategory Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use storefront_app::domain::{Category, subcategories::models::NewSubcategory};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    subcategories::{errors::into_api_error, handlers::index::SubcategoryResponse},
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateSubcategoryRequest {
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SubcategoryCreatedResponse {
    pub message: String,
    pub subcategory: SubcategoryResponse,
}

/// Create Subcategory Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubcategoryCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: CreateSubcategoryRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid subcategory payload"))?;

    let subcategory = state
        .app
        .subcategories
        .create(NewSubcategory {
            name: request.name,
            category: request.category,
        })
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(SubcategoryCreatedResponse {
        message: "Subcategory created successfully".to_string(),
        subcategory: subcategory.into(),
    }))
}
