//! Payment link store contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::payment_links::models::{PaymentLink, PaymentLinkDraft, PaymentLinkUuid},
    store::StoreError,
};

/// Persistence contract for payment links.
///
/// Inserts take a fully-formed draft (identity included); stores only assign
/// the creation timestamp and the active flag.
#[automock]
#[async_trait]
pub trait PaymentLinkStore: Send + Sync {
    /// All links, newest first.
    async fn list(&self) -> Result<Vec<PaymentLink>, StoreError>;

    async fn create(&self, draft: PaymentLinkDraft) -> Result<PaymentLink, StoreError>;

    async fn delete(&self, link: PaymentLinkUuid) -> Result<PaymentLink, StoreError>;
}
