//! Product store contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        Category,
        products::models::{Product, ProductChanges, ProductDraft, ProductUuid},
    },
    payments::StripeProductRefs,
    store::StoreError,
};

/// Persistence contract for products.
///
/// Implementations assign identity and timestamps on insert, apply merge
/// semantics on update (a `None` change preserves the stored value), and
/// signal a missing row as [`StoreError::NotFound`].
#[automock]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products in insertion order, optionally restricted to one category.
    async fn list(&self, category: Option<Category>) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, product: ProductUuid) -> Result<Product, StoreError>;

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Merge `changes` into the stored row and touch `updated_at`.
    async fn update(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Product, StoreError>;

    /// Hard delete; orders referencing the product keep their snapshots.
    async fn delete(&self, product: ProductUuid) -> Result<Product, StoreError>;

    /// Record processor-side references written back by the mirror task.
    async fn set_stripe_refs(
        &self,
        product: ProductUuid,
        refs: StripeProductRefs,
    ) -> Result<(), StoreError>;
}
