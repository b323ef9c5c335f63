//! Order store contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::orders::models::{FulfillmentStatus, Order, OrderDraft, OrderUuid, PaymentUpdate},
    store::StoreError,
};

/// Persistence contract for orders.
///
/// Implementations assign identity and the creation timestamp on insert and
/// signal a missing row as [`StoreError::NotFound`].
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    async fn get(&self, order: OrderUuid) -> Result<Order, StoreError>;

    /// Look up the order a gateway payment intent belongs to.
    async fn find_by_payment_intent(&self, intent_id: &str)
    -> Result<Option<Order>, StoreError>;

    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError>;

    async fn update_status(
        &self,
        order: OrderUuid,
        status: FulfillmentStatus,
    ) -> Result<Order, StoreError>;

    /// Merge payment fields into the stored row.
    async fn update_payment(
        &self,
        order: OrderUuid,
        update: PaymentUpdate,
    ) -> Result<Order, StoreError>;

    async fn delete(&self, order: OrderUuid) -> Result<Order, StoreError>;
}
