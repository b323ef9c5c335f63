//! In-memory product store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::{
    domain::{
        Category,
        products::{
            models::{Product, ProductChanges, ProductDraft, ProductUuid},
            repository::ProductStore,
        },
    },
    payments::StripeProductRefs,
    store::StoreError,
};

/// Product store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_changes(row: &mut Product, changes: ProductChanges) {
    if let Some(name) = changes.name {
        row.name = name;
    }
    if let Some(description) = changes.description {
        row.description = description;
    }
    if let Some(price) = changes.price {
        row.price = price;
    }
    if let Some(category) = changes.category {
        row.category = category;
    }
    if let Some(subcategory) = changes.subcategory {
        row.subcategory = subcategory;
    }
    if let Some(stock) = changes.stock {
        row.stock = stock;
    }
    if let Some(featured) = changes.featured {
        row.featured = featured;
    }
    if let Some(images) = changes.images {
        row.images = images;
    }

    row.updated_at = Timestamp::now();
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, category: Option<Category>) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| category.is_none_or(|c| row.category == c))
            .cloned()
            .collect())
    }

    async fn get(&self, product: ProductUuid) -> Result<Product, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.uuid == product)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let now = Timestamp::now();

        let row = Product {
            uuid: ProductUuid::new(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            subcategory: draft.subcategory,
            stock: draft.stock,
            featured: draft.featured,
            images: draft.images,
            stripe_product_id: None,
            stripe_price_id: None,
            created_at: now,
            updated_at: now,
        };

        self.rows.write().await.push(row.clone());

        Ok(row)
    }

    async fn update(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Product, StoreError> {
        let mut rows = self.rows.write().await;

        let row = rows
            .iter_mut()
            .find(|row| row.uuid == product)
            .ok_or(StoreError::NotFound)?;

        apply_changes(row, changes);

        Ok(row.clone())
    }

    async fn delete(&self, product: ProductUuid) -> Result<Product, StoreError> {
        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.uuid == product)
            .ok_or(StoreError::NotFound)?;

        Ok(rows.remove(index))
    }

    async fn set_stripe_refs(
        &self,
        product: ProductUuid,
        refs: StripeProductRefs,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;

        let row = rows
            .iter_mut()
            .find(|row| row.uuid == product)
            .ok_or(StoreError::NotFound)?;

        row.stripe_product_id = Some(refs.product_id);
        row.stripe_price_id = Some(refs.price_id);

        Ok(())
    }
}
