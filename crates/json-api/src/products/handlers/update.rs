//! Update Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{Category, products::models::ProductUpdate};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::get::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Absent fields are preserved. `description` and `subcategory` clear on an
/// explicit `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "double_option")]
    pub subcategory: Option<Option<Uuid>>,
    pub stock: Option<u32>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            subcategory: request
                .subcategory
                .map(|inner| inner.map(Into::into)),
            stock: request.stock,
            featured: request.featured,
            images: request.images,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductUpdatedResponse {
    pub message: String,
    pub product: ProductResponse,
}

/// Update Product Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid product id"))?;

    let body: UpdateProductRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid product payload"))?;

    let product = state
        .app
        .products
        .update(uuid.into(), body.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductUpdatedResponse {
        message: "Product updated successfully".to_string(),
        product: product.into(),
    }))
}
