//! Shared fixtures for payment handler tests.

use jiff::Timestamp;
use rust_decimal::Decimal;

use storefront_app::domain::payment_links::models::{PaymentLink, PaymentLinkUuid};

pub(crate) fn make_link(name: &str) -> PaymentLink {
    let uuid = PaymentLinkUuid::new();

    PaymentLink {
        uuid,
        name: name.to_string(),
        description: None,
        amount: Decimal::from(50),
        currency: "USD".to_string(),
        url: format!("/pay/{uuid}"),
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
