//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{Customer, NewOrder, OrderItem};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemRequest {
    pub product_uuid: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    pub customer: CustomerRequest,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    pub total_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderCreatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            customer: Customer {
                name: request.customer.name.unwrap_or_default(),
                email: request.customer.email,
                phone: request.customer.phone,
                address: request.customer.address,
            },
            items: request
                .items
                .into_iter()
                .map(|item| OrderItem {
                    product_uuid: item.product_uuid.into(),
                    name: item.name,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            total_amount: request.total_amount,
            payment_method: request.payment_method,
            card_last4: request.card_last4,
            payment_intent_id: request.payment_intent_id,
        }
    }
}

/// Create Order Handler
///
/// Public checkout endpoint.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: CreateOrderRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid order payload"))?;

    let order = state
        .app
        .orders
        .create(request.into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        message: "Order created successfully".to_string(),
        order: order.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::orders::{MockOrdersService, OrdersServiceError};
    use testresult::TestResult;

    use crate::{orders::handlers::test_support::make_order, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    fn checkout_payload() -> serde_json::Value {
        serde_json::json!({
            "customer": {"name": "Ana", "email": "ana@example.com"},
            "items": [{
                "productUuid": Uuid::now_v7(),
                "name": "Lavender Soap",
                "quantity": 2,
                "unitPrice": "10.50",
            }],
            "totalAmount": "21.00",
        })
    }

    #[tokio::test]
    async fn creates_order() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create()
            .once()
            .withf(|new| {
                new.customer.name == "Ana"
                    && new.items.len() == 1
                    && new.items[0].quantity == 2
                    && new.total_amount == Some(Decimal::new(2100, 2))
            })
            .return_once(|_| Ok(make_order("Ana")));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&checkout_payload())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OrderCreatedResponse = res.take_json().await?;
        assert_eq!(body.message, "Order created successfully");
        assert!(body.order.order_number.starts_with("ORD-"));

        Ok(())
    }

    #[tokio::test]
    async fn anonymous_checkout_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create()
            .once()
            .return_once(|_| Err(OrdersServiceError::MissingCustomer));

        let res = TestClient::post("http://example.com/orders")
            .json(&serde_json::json!({
                "customer": {},
                "items": [{
                    "productUuid": Uuid::now_v7(),
                    "name": "Lavender Soap",
                    "quantity": 1,
                    "unitPrice": "10.50",
                }],
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn total_mismatch_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create()
            .once()
            .return_once(|_| Err(OrdersServiceError::TotalMismatch));

        let mut payload = checkout_payload();
        payload["totalAmount"] = serde_json::json!("1.00");

        let res = TestClient::post("http://example.com/orders")
            .json(&payload)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_payload_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .json(&serde_json::json!({"items": "not-a-list"}))
            .send(&make_service(MockOrdersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
