//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::domain::orders::{
    errors::OrdersServiceError,
    models::{
        FulfillmentStatus, NewOrder, Order, OrderDraft, OrderItem, OrderUuid, PaymentStatus,
        PaymentUpdate, generate_order_number,
    },
    repository::OrderStore,
};

/// Exactly the last four digits of the card, never more.
fn valid_card_last4(digits: &str) -> bool {
    digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Clone)]
pub struct DefaultOrdersService {
    store: Arc<dyn OrderStore>,
}

impl DefaultOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrdersService for DefaultOrdersService {
    async fn list(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.store.list().await?)
    }

    async fn get(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        Ok(self.store.get(order).await?)
    }

    async fn create(&self, new: NewOrder) -> Result<Order, OrdersServiceError> {
        let has_identity = !new.customer.name.trim().is_empty()
            || new
                .customer
                .email
                .as_deref()
                .is_some_and(|email| !email.trim().is_empty());

        if !has_identity {
            return Err(OrdersServiceError::MissingCustomer);
        }

        if new.items.is_empty() {
            return Err(OrdersServiceError::EmptyItems);
        }

        if new.items.iter().any(|item| item.quantity == 0) {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        if let Some(card_last4) = &new.card_last4
            && !valid_card_last4(card_last4)
        {
            return Err(OrdersServiceError::InvalidCardDigits);
        }

        // The stored total always comes from the line items. A client total,
        // when sent, is only accepted if it agrees.
        let total: Decimal = new.items.iter().map(OrderItem::subtotal).sum();

        if let Some(claimed) = new.total_amount
            && claimed != total
        {
            return Err(OrdersServiceError::TotalMismatch);
        }

        // Checkout with payment details attached means the gateway is
        // already working on the charge.
        let has_payment = new.payment_intent_id.is_some() || new.card_last4.is_some();

        let payment_status = if has_payment {
            PaymentStatus::Processing
        } else {
            PaymentStatus::Pending
        };

        let payment_method = if has_payment {
            Some(
                new.payment_method
                    .unwrap_or_else(|| "credit_card".to_string()),
            )
        } else {
            new.payment_method
        };

        let draft = OrderDraft {
            order_number: generate_order_number(),
            customer: new.customer,
            items: new.items,
            total_amount: total,
            status: FulfillmentStatus::Pending,
            payment_status,
            payment_method,
            card_last4: new.card_last4,
            payment_intent_id: new.payment_intent_id,
        };

        Ok(self.store.create(draft).await?)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: FulfillmentStatus,
    ) -> Result<Order, OrdersServiceError> {
        Ok(self.store.update_status(order, status).await?)
    }

    async fn complete_payment(&self, intent_id: &str) -> Result<Order, OrdersServiceError> {
        let order = self
            .store
            .find_by_payment_intent(intent_id)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        let order = self
            .store
            .update_payment(
                order.uuid,
                PaymentUpdate {
                    payment_status: Some(PaymentStatus::Completed),
                    ..PaymentUpdate::default()
                },
            )
            .await?;

        Ok(self
            .store
            .update_status(order.uuid, FulfillmentStatus::Paid)
            .await?)
    }

    async fn fail_payment(&self, intent_id: &str) -> Result<Order, OrdersServiceError> {
        let order = self
            .store
            .find_by_payment_intent(intent_id)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        Ok(self
            .store
            .update_payment(
                order.uuid,
                PaymentUpdate {
                    payment_status: Some(PaymentStatus::Failed),
                    ..PaymentUpdate::default()
                },
            )
            .await?)
    }

    async fn record_payment(
        &self,
        order: OrderUuid,
        update: PaymentUpdate,
    ) -> Result<Order, OrdersServiceError> {
        if let Some(card_last4) = &update.card_last4
            && !valid_card_last4(card_last4)
        {
            return Err(OrdersServiceError::InvalidCardDigits);
        }

        Ok(self.store.update_payment(order, update).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// All orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, OrdersServiceError>;

    async fn get(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Validate and insert an order. The stored total is recomputed from the
    /// line items; a claimed total that disagrees rejects the order.
    async fn create(&self, new: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Set the fulfillment status. Transitions are unrestricted.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: FulfillmentStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Mark the order owning `intent_id` as paid.
    async fn complete_payment(&self, intent_id: &str) -> Result<Order, OrdersServiceError>;

    /// Mark the order owning `intent_id` as failed.
    async fn fail_payment(&self, intent_id: &str) -> Result<Order, OrdersServiceError>;

    /// Merge payment fields reported by the gateway or checkout flow.
    async fn record_payment(
        &self,
        order: OrderUuid,
        update: PaymentUpdate,
    ) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        orders::{memory::MemoryOrderStore, models::Customer},
        products::models::ProductUuid,
    };

    use super::*;

    fn service() -> DefaultOrdersService {
        DefaultOrdersService::new(Arc::new(MemoryOrderStore::new()))
    }

    fn customer(name: &str) -> Customer {
        Customer {
            name: name.to_string(),
            email: Some("ana@example.com".to_string()),
            phone: None,
            address: None,
        }
    }

    fn item(quantity: u32, unit_price: Decimal) -> OrderItem {
        OrderItem {
            product_uuid: ProductUuid::new(),
            name: "Lavender Soap".to_string(),
            quantity,
            unit_price,
        }
    }

    fn new_order(items: Vec<OrderItem>) -> NewOrder {
        NewOrder {
            customer: customer("Ana"),
            items,
            total_amount: None,
            payment_method: None,
            card_last4: None,
            payment_intent_id: None,
        }
    }

    #[tokio::test]
    async fn create_computes_total_and_defaults() -> TestResult {
        let order = service()
            .create(new_order(vec![
                item(2, Decimal::new(1050, 2)),
                item(1, Decimal::from(5)),
            ]))
            .await?;

        assert_eq!(order.total_amount, Decimal::new(2600, 2));
        assert_eq!(order.status, FulfillmentStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert!(order.order_number.starts_with("ORD-"));

        Ok(())
    }

    #[tokio::test]
    async fn create_accepts_matching_claimed_total() -> TestResult {
        let mut new = new_order(vec![item(2, Decimal::from(10))]);
        new.total_amount = Some(Decimal::from(20));

        let order = service().create(new).await?;

        assert_eq!(order.total_amount, Decimal::from(20));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_total_mismatch() {
        let mut new = new_order(vec![item(2, Decimal::from(10))]);
        new.total_amount = Some(Decimal::from(15));

        let result = service().create(new).await;

        assert!(
            matches!(result, Err(OrdersServiceError::TotalMismatch)),
            "expected TotalMismatch, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_blank_customer() {
        let mut new = new_order(vec![item(1, Decimal::from(10))]);
        new.customer = customer("   ");
        new.customer.email = None;

        let result = service().create(new).await;

        assert!(
            matches!(result, Err(OrdersServiceError::MissingCustomer)),
            "expected MissingCustomer, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_accepts_email_only_identity() -> TestResult {
        let mut new = new_order(vec![item(1, Decimal::from(10))]);
        new.customer = customer("");

        let order = service().create(new).await?;

        assert_eq!(order.customer.email.as_deref(), Some("ana@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn create_with_payment_details_is_processing() -> TestResult {
        let mut new = new_order(vec![item(1, Decimal::from(10))]);
        new.payment_intent_id = Some("pi_789".to_string());
        new.card_last4 = Some("4242".to_string());

        let order = service().create(new).await?;

        assert_eq!(order.payment_status, PaymentStatus::Processing);
        assert_eq!(order.payment_method.as_deref(), Some("credit_card"));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_empty_items() {
        let result = service().create(new_order(Vec::new())).await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyItems)),
            "expected EmptyItems, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_zero_quantity() {
        let result = service()
            .create(new_order(vec![item(0, Decimal::from(10))]))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidQuantity)),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_malformed_card_digits() {
        for bad in ["12a4", "123", "12345"] {
            let mut new = new_order(vec![item(1, Decimal::from(10))]);
            new.card_last4 = Some(bad.to_string());

            let result = service().create(new).await;

            assert!(
                matches!(result, Err(OrdersServiceError::InvalidCardDigits)),
                "expected InvalidCardDigits for {bad:?}, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn update_status_moves_in_any_direction() -> TestResult {
        let service = service();

        let order = service
            .create(new_order(vec![item(1, Decimal::from(10))]))
            .await?;

        let shipped = service
            .update_status(order.uuid, FulfillmentStatus::Shipped)
            .await?;
        assert_eq!(shipped.status, FulfillmentStatus::Shipped);

        let reverted = service
            .update_status(order.uuid, FulfillmentStatus::Pending)
            .await?;
        assert_eq!(reverted.status, FulfillmentStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn complete_payment_marks_order_paid() -> TestResult {
        let service = service();

        let mut new = new_order(vec![item(1, Decimal::from(10))]);
        new.payment_intent_id = Some("pi_123".to_string());

        service.create(new).await?;

        let order = service.complete_payment("pi_123").await?;

        assert_eq!(order.payment_status, PaymentStatus::Completed);
        assert_eq!(order.status, FulfillmentStatus::Paid);

        Ok(())
    }

    #[tokio::test]
    async fn complete_payment_for_unknown_intent_is_not_found() {
        let result = service().complete_payment("pi_missing").await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn fail_payment_keeps_fulfillment_pending() -> TestResult {
        let service = service();

        let mut new = new_order(vec![item(1, Decimal::from(10))]);
        new.payment_intent_id = Some("pi_456".to_string());

        service.create(new).await?;

        let order = service.fail_payment("pi_456").await?;

        assert_eq!(order.payment_status, PaymentStatus::Failed);
        assert_eq!(order.status, FulfillmentStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn record_payment_merges_card_digits() -> TestResult {
        let service = service();

        let order = service
            .create(new_order(vec![item(1, Decimal::from(10))]))
            .await?;

        let updated = service
            .record_payment(
                order.uuid,
                PaymentUpdate {
                    payment_status: Some(PaymentStatus::Completed),
                    card_last4: Some("4242".to_string()),
                    ..PaymentUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.payment_status, PaymentStatus::Completed);
        assert_eq!(updated.card_last4.as_deref(), Some("4242"));

        Ok(())
    }

    #[tokio::test]
    async fn record_payment_rejects_full_card_number() -> TestResult {
        let service = service();

        let order = service
            .create(new_order(vec![item(1, Decimal::from(10))]))
            .await?;

        for bad in ["4111111111111111", "12a4", "123"] {
            let result = service
                .record_payment(
                    order.uuid,
                    PaymentUpdate {
                        card_last4: Some(bad.to_string()),
                        ..PaymentUpdate::default()
                    },
                )
                .await;

            assert!(
                matches!(result, Err(OrdersServiceError::InvalidCardDigits)),
                "expected InvalidCardDigits for {bad:?}, got {result:?}"
            );
        }

        Ok(())
    }
}
