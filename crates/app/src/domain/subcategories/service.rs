//! Subcategories service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    Category,
    subcategories::{
        errors::SubcategoriesServiceError,
        models::{NewSubcategory, Subcategory, SubcategoryUuid},
        repository::SubcategoryStore,
    },
};

#[derive(Clone)]
pub struct DefaultSubcategoriesService {
    store: Arc<dyn SubcategoryStore>,
}

impl DefaultSubcategoriesService {
    #[must_use]
    pub fn new(store: Arc<dyn SubcategoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubcategoriesService for DefaultSubcategoriesService {
    async fn list(&self) -> Result<Vec<Subcategory>, SubcategoriesServiceError> {
        Ok(self.store.list().await?)
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Subcategory>, SubcategoriesServiceError> {
        Ok(self.store.list_by_category(category).await?)
    }

    async fn create(
        &self,
        new: NewSubcategory,
    ) -> Result<Subcategory, SubcategoriesServiceError> {
        if new.name.trim().is_empty() {
            return Err(SubcategoriesServiceError::MissingName);
        }

        if self
            .store
            .find_by_name(new.category, &new.name)
            .await?
            .is_some()
        {
            return Err(SubcategoriesServiceError::AlreadyExists);
        }

        Ok(self.store.create(new).await?)
    }

    async fn rename(
        &self,
        subcategory: SubcategoryUuid,
        name: String,
    ) -> Result<Subcategory, SubcategoriesServiceError> {
        if name.trim().is_empty() {
            return Err(SubcategoriesServiceError::MissingName);
        }

        Ok(self.store.rename(subcategory, name).await?)
    }

    async fn delete(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<Subcategory, SubcategoriesServiceError> {
        Ok(self.store.delete(subcategory).await?)
    }
}

#[automock]
#[async_trait]
pub trait SubcategoriesService: Send + Sync {
    /// All subcategories, ordered by category then creation time.
    async fn list(&self) -> Result<Vec<Subcategory>, SubcategoriesServiceError>;

    /// Subcategories of a single category.
    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Subcategory>, SubcategoriesServiceError>;

    /// Create a subcategory; `(name, category)` pairs are unique.
    async fn create(&self, new: NewSubcategory)
    -> Result<Subcategory, SubcategoriesServiceError>;

    /// Change a subcategory's name. Products referencing it keep their
    /// cached display name.
    async fn rename(
        &self,
        subcategory: SubcategoryUuid,
        name: String,
    ) -> Result<Subcategory, SubcategoriesServiceError>;

    async fn delete(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<Subcategory, SubcategoriesServiceError>;
}
