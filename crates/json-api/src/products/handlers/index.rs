//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::Category;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::get::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Lists products, optionally narrowed by `category` and `subcategory`
/// query parameters. The subcategory filter accepts a display name or a
/// uuid string.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = match req.query::<String>("category") {
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|_| ApiError::bad_request("Unknown category"))?,
        ),
        None => None,
    };

    let subcategory = req.query::<String>("subcategory");

    let products = state
        .app
        .products
        .list(category, subcategory)
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::products::MockProductsService;
    use testresult::TestResult;

    use crate::{
        products::handlers::test_support::make_product, test_helpers::products_service,
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn lists_products() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list()
            .once()
            .withf(|category, subcategory| category.is_none() && subcategory.is_none())
            .return_once(|_, _| Ok(vec![make_product("Soap"), make_product("Honey")]));

        let response: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 2);
        assert_eq!(response[0].name, "Soap");

        Ok(())
    }

    #[tokio::test]
    async fn forwards_filters() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list()
            .once()
            .withf(|category, subcategory| {
                *category == Some(Category::Natural) && subcategory.as_deref() == Some("Soaps")
            })
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get(
            "http://example.com/products?category=natural&subcategory=Soaps",
        )
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products?category=vintage")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
