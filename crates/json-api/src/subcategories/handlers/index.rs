//! Subcategory Index Handlers

use std::sync::Arc;

use jiff::Timestamp;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{Category, subcategories::models::Subcategory};

use crate::{
    errors::ApiError, extensions::*, state::State, subcategories::errors::into_api_error,
};

/// Subcategory Response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubcategoryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub category: Category,
    pub created_at: Timestamp,
}

impl From<Subcategory> for SubcategoryResponse {
    fn from(subcategory: Subcategory) -> Self {
        Self {
            uuid: subcategory.uuid.into_uuid(),
            name: subcategory.name,
            category: subcategory.category,
            created_at: subcategory.created_at,
        }
    }
}

/// List every subcategory across both categories.
#[salvo::handler]
pub(crate) async fn all(
    depot: &mut Depot,
) -> Result<Json<Vec<SubcategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let subcategories = state
        .app
        .subcategories
        .list()
        .await
        .map_err(into_api_error)?;

    Ok(Json(subcategories.into_iter().map(Into::into).collect()))
}

/// List the subcategories of one category, given by its wire name.
#[salvo::handler]
pub(crate) async fn by_category(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<SubcategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category: Category = req
        .param::<String>("category")
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ApiError::bad_request("Unknown category"))?;

    let subcategories = state
        .app
        .subcategories
        .list_by_category(category)
        .await
        .map_err(into_api_error)?;

    Ok(Json(subcategories.into_iter().map(Into::into).collect()))
}
