//! Update Order Payment Status Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{PaymentStatus, PaymentUpdate};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, handlers::get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentUpdatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

/// Update Order Payment Status Handler
///
/// Omitted payment fields keep their stored values.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PaymentUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid order id"))?;

    let request: UpdatePaymentStatusRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::bad_request("Invalid payment status"))?;

    let order = state
        .app
        .orders
        .record_payment(
            uuid.into(),
            PaymentUpdate {
                payment_status: Some(request.payment_status),
                payment_method: request.payment_method,
                card_last4: request.card_last4,
                payment_intent_id: request.payment_intent_id,
            },
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(PaymentUpdatedResponse {
        message: "Payment status updated successfully".to_string(),
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
        orders_service(
            orders,
            Router::with_path("orders")
                .push(Router::with_path("{id}/payment-status").put(handler)),
        )
    }

    #[tokio::test]
    async fn updates_payment_status() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_record_payment()
            .once()
            .withf(|_, update| {
                update.payment_status == Some(PaymentStatus::Completed)
                    && update.payment_method.as_deref() == Some("credit_card")
                    && update.card_last4.is_none()
            })
            .return_once(|_, _| {
                let mut order = make_order("Ana");
                order.payment_status = PaymentStatus::Completed;
                Ok(order)
            });

        let mut res = TestClient::put(format!(
            "http://example.com/orders/{}/payment-status",
            Uuid::now_v7()
        ))
        .json(&serde_json::json!({
            "paymentStatus": "completed",
            "paymentMethod": "credit_card",
        }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PaymentUpdatedResponse = res.take_json().await?;
        assert_eq!(body.order.payment_status, PaymentStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_record_payment()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/orders/{}/payment-status",
            Uuid::now_v7()
        ))
        .json(&serde_json::json!({"paymentStatus": "failed"}))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_payment_status_returns_400() -> TestResult {
        let res = TestClient::put(format!(
            "http://example.com/orders/{}/payment-status",
            Uuid::now_v7()
        ))
        .json(&serde_json::json!({"paymentStatus": "refunded"}))
        .send(&make_service(MockOrdersService::new()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
