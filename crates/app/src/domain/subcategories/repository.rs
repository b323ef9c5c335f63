//! Subcategory store contract.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        Category,
        subcategories::models::{NewSubcategory, Subcategory, SubcategoryUuid},
    },
    store::StoreError,
};

/// Persistence contract for subcategories.
///
/// Implementations assign identity and creation timestamps, signal a
/// duplicate `(name, category)` pair as [`StoreError::Conflict`], and a
/// missing row as [`StoreError::NotFound`].
#[automock]
#[async_trait]
pub trait SubcategoryStore: Send + Sync {
    /// All subcategories, ordered by category then creation time.
    async fn list(&self) -> Result<Vec<Subcategory>, StoreError>;

    /// Subcategories of one category, ordered by creation time.
    async fn list_by_category(&self, category: Category) -> Result<Vec<Subcategory>, StoreError>;

    async fn get(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError>;

    async fn find_by_name(
        &self,
        category: Category,
        name: &str,
    ) -> Result<Option<Subcategory>, StoreError>;

    async fn create(&self, new: NewSubcategory) -> Result<Subcategory, StoreError>;

    async fn rename(
        &self,
        subcategory: SubcategoryUuid,
        name: String,
    ) -> Result<Subcategory, StoreError>;

    async fn delete(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError>;
}
