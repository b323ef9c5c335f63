//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductDeletedResponse {
    pub message: String,
    pub product: ProductResponse,
}

/// Delete Product Handler
///
/// Hard delete. Orders keep their item snapshots.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid product id"))?;

    let product = state
        .app
        .products
        .delete(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted successfully".to_string(),
        product: product.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};
    use testresult::TestResult;

    use crate::{
        products::handlers::test_support::make_product, test_helpers::products_service,
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("products").push(Router::with_path("{id}").delete(handler)),
        )
    }

    #[tokio::test]
    async fn deletes_product() -> TestResult {
        let product = make_product("Lavender Soap");
        let uuid = product.uuid;

        let mut products = MockProductsService::new();

        products
            .expect_delete()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| Ok(product));

        let mut res = TestClient::delete(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductDeletedResponse = res.take_json().await?;
        assert_eq!(body.message, "Product deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/products/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
