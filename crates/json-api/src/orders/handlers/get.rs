//! Get Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{
    FulfillmentStatus, Order, OrderItem, PaymentStatus,
};

use crate::{
    errors::ApiError, extensions::*, orders::errors::into_api_error, state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CustomerResponse {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub product_uuid: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into_uuid(),
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub order_number: String,
    pub customer: CustomerResponse,
    pub items: Vec<OrderItemResponse>,
    pub total_amount: Decimal,
    pub status: FulfillmentStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
    pub created_at: Timestamp,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            order_number: order.order_number,
            customer: CustomerResponse {
                name: order.customer.name,
                email: order.customer.email,
                phone: order.customer.phone,
                address: order.customer.address,
            },
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            status: order.status,
            payment_status: order.payment_status,
            payment_method: order.payment_method,
            card_last4: order.card_last4,
            payment_intent_id: order.payment_intent_id,
            created_at: order.created_at,
        }
    }
}

/// Get Order Handler
///
/// Public so customers can check on an order they just placed.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid order id"))?;

    let order = state
        .app
        .orders
        .get(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::orders::{MockOrdersService, OrdersServiceError};
    use testresult::TestResult;

    use crate::{orders::handlers::test_support::make_order, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("orders").push(Router::with_path("{id}").get(handler)),
        )
    }

    #[tokio::test]
    async fn returns_order() -> TestResult {
        let order = make_order("Ana");
        let uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_get()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| Ok(order));

        let response: OrderResponse =
            TestClient::get(format!("http://example.com/orders/{uuid}"))
                .send(&make_service(orders))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.customer.name, "Ana");
        assert_eq!(response.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/orders/{}", Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/orders/not-a-uuid")
            .send(&make_service(MockOrdersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
