//! Payment Link Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::payment_links::models::PaymentLink;

use crate::{
    errors::ApiError, extensions::*, payments::errors::into_api_error, state::State,
};

/// Payment Link Response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentLinkResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<PaymentLink> for PaymentLinkResponse {
    fn from(link: PaymentLink) -> Self {
        Self {
            uuid: link.uuid.into_uuid(),
            name: link.name,
            description: link.description,
            amount: link.amount,
            currency: link.currency,
            url: link.url,
            is_active: link.is_active,
            created_at: link.created_at,
        }
    }
}

/// Payment Link Index Handler
///
/// Admin-only; newest links first.
#[salvo::handler]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PaymentLinkResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let links = state
        .app
        .payment_links
        .list()
        .await
        .map_err(into_api_error)?;

    Ok(Json(links.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront_app::domain::payment_links::MockPaymentLinksService;
    use testresult::TestResult;

    use crate::{
        payments::handlers::test_support::make_link, test_helpers::payment_links_service,
    };

    use super::*;

    fn make_service(payment_links: MockPaymentLinksService) -> Service {
        payment_links_service(payment_links, Router::with_path("payments").get(handler))
    }

    #[tokio::test]
    async fn lists_links() -> TestResult {
        let mut payment_links = MockPaymentLinksService::new();

        payment_links
            .expect_list()
            .once()
            .return_once(|| Ok(vec![make_link("Consultation"), make_link("Workshop")]));

        let response: Vec<PaymentLinkResponse> =
            TestClient::get("http://example.com/payments")
                .send(&make_service(payment_links))
                .await
                .take_json()
                .await?;

        assert_eq!(response.len(), 2);
        assert!(response[0].url.starts_with("/pay/"));

        Ok(())
    }
}
