//! Payment Link Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Payment Link UUID
pub type PaymentLinkUuid = TypedUuid<PaymentLink>;

/// Default currency for new links.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A shareable request for a fixed amount, independent of the catalog.
#[derive(Debug, Clone)]
pub struct PaymentLink {
    pub uuid: PaymentLinkUuid,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    /// ISO 4217 code, uppercase.
    pub currency: String,
    /// Share path embedding the link's uuid.
    pub url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// New Payment Link Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentLink {
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
}

/// Validated row handed to a store for insertion.
///
/// Unlike other drafts this one carries its identity: the share URL embeds
/// the uuid, so the service mints both together.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLinkDraft {
    pub uuid: PaymentLinkUuid,
    pub name: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub url: String,
}
