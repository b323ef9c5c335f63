//! In-memory subcategory store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::{
    domain::{
        Category,
        subcategories::{
            models::{NewSubcategory, Subcategory, SubcategoryUuid},
            repository::SubcategoryStore,
        },
    },
    store::StoreError,
};

/// Subcategory store backed by process memory.
#[derive(Debug, Default)]
pub struct MemorySubcategoryStore {
    rows: RwLock<Vec<Subcategory>>,
}

impl MemorySubcategoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubcategoryStore for MemorySubcategoryStore {
    async fn list(&self) -> Result<Vec<Subcategory>, StoreError> {
        let mut rows = self.rows.read().await.clone();

        rows.sort_by_key(|row| (row.category.as_str(), row.created_at, row.uuid));

        Ok(rows)
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<Subcategory>, StoreError> {
        let mut rows: Vec<Subcategory> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.category == category)
            .cloned()
            .collect();

        rows.sort_by_key(|row| (row.created_at, row.uuid));

        Ok(rows)
    }

    async fn get(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.uuid == subcategory)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_name(
        &self,
        category: Category,
        name: &str,
    ) -> Result<Option<Subcategory>, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.category == category && row.name == name)
            .cloned())
    }

    async fn create(&self, new: NewSubcategory) -> Result<Subcategory, StoreError> {
        let mut rows = self.rows.write().await;

        if rows
            .iter()
            .any(|row| row.category == new.category && row.name == new.name)
        {
            return Err(StoreError::Conflict);
        }

        let row = Subcategory {
            uuid: SubcategoryUuid::new(),
            name: new.name,
            category: new.category,
            created_at: Timestamp::now(),
        };

        rows.push(row.clone());

        Ok(row)
    }

    async fn rename(
        &self,
        subcategory: SubcategoryUuid,
        name: String,
    ) -> Result<Subcategory, StoreError> {
        let mut rows = self.rows.write().await;

        let category = rows
            .iter()
            .find(|row| row.uuid == subcategory)
            .ok_or(StoreError::NotFound)?
            .category;

        // Uniqueness is scoped per category, matching the relational
        // constraint.
        if rows
            .iter()
            .any(|row| row.uuid != subcategory && row.category == category && row.name == name)
        {
            return Err(StoreError::Conflict);
        }

        let row = rows
            .iter_mut()
            .find(|row| row.uuid == subcategory)
            .ok_or(StoreError::NotFound)?;

        row.name = name;

        Ok(row.clone())
    }

    async fn delete(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError> {
        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.uuid == subcategory)
            .ok_or(StoreError::NotFound)?;

        Ok(rows.remove(index))
    }
}
