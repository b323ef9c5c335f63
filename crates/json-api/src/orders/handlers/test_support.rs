//! Shared fixtures for order handler tests.

use jiff::Timestamp;
use rust_decimal::Decimal;

use storefront_app::domain::{
    orders::models::{
        Customer, FulfillmentStatus, Order, OrderItem, OrderUuid, PaymentStatus,
    },
    products::models::ProductUuid,
};

pub(crate) fn make_order(customer_name: &str) -> Order {
    Order {
        uuid: OrderUuid::new(),
        order_number: "ORD-1735689600000-0421".to_string(),
        customer: Customer {
            name: customer_name.to_string(),
            email: Some("ana@example.com".to_string()),
            phone: None,
            address: None,
        },
        items: vec![OrderItem {
            product_uuid: ProductUuid::new(),
            name: "Lavender Soap".to_string(),
            quantity: 2,
            unit_price: Decimal::new(1050, 2),
        }],
        total_amount: Decimal::new(2100, 2),
        status: FulfillmentStatus::Pending,
        payment_status: PaymentStatus::Pending,
        payment_method: None,
        card_last4: None,
        payment_intent_id: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
