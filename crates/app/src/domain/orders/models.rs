//! Order Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Fulfillment state of an order. Transitions are unrestricted so staff can
/// correct mistakes in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
}

impl FulfillmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Payment state of an order, driven by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

/// Customer details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// One line of an order.
///
/// `unit_price` is a snapshot taken at checkout; later catalog edits do not
/// change past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    /// Line total.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Order Model
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    /// Human-facing identifier, e.g. `ORD-1735689600000-0421`.
    pub order_number: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: FulfillmentStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
    pub created_at: Timestamp,
}

/// New Order Model
///
/// Service-level input. `total_amount` is the client's claimed total and is
/// checked against the sum of the line items, never trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: Option<Decimal>,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
}

/// Validated row handed to a store for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_number: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: FulfillmentStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
}

/// Payment fields recorded when the gateway reports progress. `None` fields
/// keep their stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentUpdate {
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<String>,
    pub card_last4: Option<String>,
    pub payment_intent_id: Option<String>,
}

/// Generate a human-facing order number from the current time plus a small
/// random suffix to separate orders placed in the same millisecond.
#[must_use]
pub fn generate_order_number() -> String {
    let millis = Timestamp::now().as_millisecond();
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);

    format!("ORD-{millis}-{suffix:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_round_trip_through_strings() -> Result<(), UnknownStatus> {
        for status in [
            FulfillmentStatus::Pending,
            FulfillmentStatus::Paid,
            FulfillmentStatus::Shipped,
            FulfillmentStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<FulfillmentStatus>()?, status);
        }

        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Processing,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("cancelled".parse::<FulfillmentStatus>().is_err());
    }

    #[test]
    fn order_numbers_carry_prefix_and_suffix() {
        let number = generate_order_number();

        assert!(number.starts_with("ORD-"));
        assert_eq!(number.split('-').count(), 3);
    }

    #[test]
    fn item_subtotal_multiplies_quantity() {
        let item = OrderItem {
            product_uuid: ProductUuid::new(),
            name: "Soap".to_string(),
            quantity: 3,
            unit_price: Decimal::new(1050, 2),
        };

        assert_eq!(item.subtotal(), Decimal::new(3150, 2));
    }
}
