//! In-memory payment link store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::{
    domain::payment_links::{
        models::{PaymentLink, PaymentLinkDraft, PaymentLinkUuid},
        repository::PaymentLinkStore,
    },
    store::StoreError,
};

/// Payment link store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryPaymentLinkStore {
    rows: RwLock<Vec<PaymentLink>>,
}

impl MemoryPaymentLinkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentLinkStore for MemoryPaymentLinkStore {
    async fn list(&self) -> Result<Vec<PaymentLink>, StoreError> {
        let mut rows: Vec<PaymentLink> = self.rows.read().await.iter().cloned().collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(rows)
    }

    async fn create(&self, draft: PaymentLinkDraft) -> Result<PaymentLink, StoreError> {
        let row = PaymentLink {
            uuid: draft.uuid,
            name: draft.name,
            description: draft.description,
            amount: draft.amount,
            currency: draft.currency,
            url: draft.url,
            is_active: true,
            created_at: Timestamp::now(),
        };

        self.rows.write().await.push(row.clone());

        Ok(row)
    }

    async fn delete(&self, link: PaymentLinkUuid) -> Result<PaymentLink, StoreError> {
        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.uuid == link)
            .ok_or(StoreError::NotFound)?;

        Ok(rows.remove(index))
    }
}
