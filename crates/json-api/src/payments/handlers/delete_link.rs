//! Delete Payment Link Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    payments::{errors::into_api_error, handlers::index::PaymentLinkResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaymentLinkDeletedResponse {
    pub message: String,
    pub link: PaymentLinkResponse,
}

/// Delete Payment Link Handler
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PaymentLinkDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid: Uuid = req
        .param("id")
        .ok_or_else(|| ApiError::bad_request("Invalid payment link id"))?;

    let link = state
        .app
        .payment_links
        .delete(uuid.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(PaymentLinkDeletedResponse {
        message: "Payment link deleted successfully".to_string(),
        link: link.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::payment_links::{
        MockPaymentLinksService, PaymentLinksServiceError,
    };
    use testresult::TestResult;

    use crate::{
        payments::handlers::test_support::make_link, test_helpers::payment_links_service,
    };

    use super::*;

    fn make_service(payment_links: MockPaymentLinksService) -> Service {
        payment_links_service(
            payment_links,
            Router::with_path("payments").push(Router::with_path("{id}").delete(handler)),
        )
    }

    #[tokio::test]
    async fn deletes_link() -> TestResult {
        let link = make_link("Consultation");
        let uuid = link.uuid;

        let mut payment_links = MockPaymentLinksService::new();

        payment_links
            .expect_delete()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| Ok(link));

        let mut res = TestClient::delete(format!("http://example.com/payments/{uuid}"))
            .send(&make_service(payment_links))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PaymentLinkDeletedResponse = res.take_json().await?;
        assert_eq!(body.message, "Payment link deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_link_returns_404() -> TestResult {
        let mut payment_links = MockPaymentLinksService::new();

        payment_links
            .expect_delete()
            .once()
            .return_once(|_| Err(PaymentLinksServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/payments/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(payment_links))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
