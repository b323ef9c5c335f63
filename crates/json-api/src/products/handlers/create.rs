//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{Category, products::models::NewProduct};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::get::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Category,
    pub subcategory: Option<Uuid>,
    pub stock: Option<u32>,
    pub images: Option<Vec<String>>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            subcategory: request.subcategory.map(Into::into),
            stock: request.stock,
            images: request.images,
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductCreatedResponse {
    pub message: String,
    pub product: ProductResponse,
}

/// Create Product Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body: CreateProductRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid product payload"))?;

    let product = state
        .app
        .products
        .create(body.into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        message: "Product created successfully".to_string(),
        product: product.into(),
    }))
}
