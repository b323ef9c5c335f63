//! In-memory order store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::{
    domain::orders::{
        models::{FulfillmentStatus, Order, OrderDraft, OrderUuid, PaymentUpdate},
        repository::OrderStore,
    },
    store::StoreError,
};

/// Order store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    rows: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_payment(row: &mut Order, update: PaymentUpdate) {
    if let Some(payment_status) = update.payment_status {
        row.payment_status = payment_status;
    }
    if let Some(payment_method) = update.payment_method {
        row.payment_method = Some(payment_method);
    }
    if let Some(card_last4) = update.card_last4 {
        row.card_last4 = Some(card_last4);
    }
    if let Some(payment_intent_id) = update.payment_intent_id {
        row.payment_intent_id = Some(payment_intent_id);
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut rows: Vec<Order> = self.rows.read().await.iter().cloned().collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(rows)
    }

    async fn get(&self, order: OrderUuid) -> Result<Order, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.uuid == order)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<Option<Order>, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.payment_intent_id.as_deref() == Some(intent_id))
            .cloned())
    }

    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let row = Order {
            uuid: OrderUuid::new(),
            order_number: draft.order_number,
            customer: draft.customer,
            items: draft.items,
            total_amount: draft.total_amount,
            status: draft.status,
            payment_status: draft.payment_status,
            payment_method: draft.payment_method,
            card_last4: draft.card_last4,
            payment_intent_id: draft.payment_intent_id,
            created_at: Timestamp::now(),
        };

        self.rows.write().await.push(row.clone());

        Ok(row)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: FulfillmentStatus,
    ) -> Result<Order, StoreError> {
        let mut rows = self.rows.write().await;

        let row = rows
            .iter_mut()
            .find(|row| row.uuid == order)
            .ok_or(StoreError::NotFound)?;

        row.status = status;

        Ok(row.clone())
    }

    async fn update_payment(
        &self,
        order: OrderUuid,
        update: PaymentUpdate,
    ) -> Result<Order, StoreError> {
        let mut rows = self.rows.write().await;

        let row = rows
            .iter_mut()
            .find(|row| row.uuid == order)
            .ok_or(StoreError::NotFound)?;

        apply_payment(row, update);

        Ok(row.clone())
    }

    async fn delete(&self, order: OrderUuid) -> Result<Order, StoreError> {
        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.uuid == order)
            .ok_or(StoreError::NotFound)?;

        Ok(rows.remove(index))
    }
}
