//! Payment links service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::domain::payment_links::{
    errors::PaymentLinksServiceError,
    models::{DEFAULT_CURRENCY, NewPaymentLink, PaymentLink, PaymentLinkDraft, PaymentLinkUuid},
    repository::PaymentLinkStore,
};

#[derive(Clone)]
pub struct DefaultPaymentLinksService {
    store: Arc<dyn PaymentLinkStore>,
}

impl DefaultPaymentLinksService {
    #[must_use]
    pub fn new(store: Arc<dyn PaymentLinkStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentLinksService for DefaultPaymentLinksService {
    async fn list(&self) -> Result<Vec<PaymentLink>, PaymentLinksServiceError> {
        Ok(self.store.list().await?)
    }

    async fn create(
        &self,
        new: NewPaymentLink,
    ) -> Result<PaymentLink, PaymentLinksServiceError> {
        if new.name.trim().is_empty() {
            return Err(PaymentLinksServiceError::MissingName);
        }

        if new.amount <= Decimal::ZERO {
            return Err(PaymentLinksServiceError::InvalidAmount);
        }

        let uuid = PaymentLinkUuid::new();

        let currency = new
            .currency
            .map_or_else(|| DEFAULT_CURRENCY.to_string(), |c| c.to_uppercase());

        let draft = PaymentLinkDraft {
            uuid,
            name: new.name,
            description: new.description,
            amount: new.amount,
            currency,
            url: format!("/pay/{uuid}"),
        };

        Ok(self.store.create(draft).await?)
    }

    async fn delete(
        &self,
        link: PaymentLinkUuid,
    ) -> Result<PaymentLink, PaymentLinksServiceError> {
        Ok(self.store.delete(link).await?)
    }
}

#[automock]
#[async_trait]
pub trait PaymentLinksService: Send + Sync {
    /// All links, newest first.
    async fn list(&self) -> Result<Vec<PaymentLink>, PaymentLinksServiceError>;

    /// Validate and insert a link, minting its share URL.
    async fn create(&self, new: NewPaymentLink)
    -> Result<PaymentLink, PaymentLinksServiceError>;

    async fn delete(
        &self,
        link: PaymentLinkUuid,
    ) -> Result<PaymentLink, PaymentLinksServiceError>;
}
