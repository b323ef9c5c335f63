//! Get Product Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{Category, products::models::{Product, SubcategoryRef}};

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error, state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SubcategoryRefResponse {
    pub uuid: Uuid,
    pub name: String,
}

impl From<SubcategoryRef> for SubcategoryRefResponse {
    fn from(reference: SubcategoryRef) -> Self {
        Self {
            uuid: reference.uuid.into_uuid(),
            name: reference.name,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Category,
    pub subcategory: Option<SubcategoryRefResponse>,
    pub stock: u32,
    pub featured: bool,
    pub images: Vec<String>,
    pub stripe_product_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            subcategory: product.subcategory.map(Into::into),
            stock: product.stock,
            featured: product.featured,
            images: product.images,
            stripe_product_id: product.stripe_product_id,
            stripe_price_id: product.stripe_price_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Get Product Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid product id"))?;

    let product = state
        .app
        .products
        .get(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
