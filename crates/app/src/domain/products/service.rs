//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    domain::{
        Category,
        products::{
            errors::ProductsServiceError,
            models::{
                MAX_IMAGES, NewProduct, Product, ProductChanges, ProductDraft, ProductUpdate,
                ProductUuid, SubcategoryRef,
            },
            repository::ProductStore,
        },
        subcategories::{SubcategoryStore, models::SubcategoryUuid},
    },
    payments::StripeGateway,
    store::StoreError,
};

#[derive(Clone)]
pub struct DefaultProductsService {
    store: Arc<dyn ProductStore>,
    subcategories: Arc<dyn SubcategoryStore>,
    gateway: Option<Arc<StripeGateway>>,
}

impl DefaultProductsService {
    #[must_use]
    pub fn new(
        store: Arc<dyn ProductStore>,
        subcategories: Arc<dyn SubcategoryStore>,
        gateway: Option<Arc<StripeGateway>>,
    ) -> Self {
        Self {
            store,
            subcategories,
            gateway,
        }
    }

    /// Look up a subcategory reference and check it belongs to `category`.
    async fn resolve_subcategory(
        &self,
        subcategory: SubcategoryUuid,
        category: Category,
    ) -> Result<SubcategoryRef, ProductsServiceError> {
        // Only a missing row means the reference is bad; backend failures
        // surface as storage errors.
        let row = match self.subcategories.get(subcategory).await {
            Ok(row) => row,
            Err(StoreError::NotFound) => return Err(ProductsServiceError::UnknownSubcategory),
            Err(other) => return Err(ProductsServiceError::Store(other)),
        };

        if row.category != category {
            return Err(ProductsServiceError::CategoryMismatch);
        }

        Ok(SubcategoryRef {
            uuid: row.uuid,
            name: row.name,
        })
    }

    /// Mirror the product into the payment processor in the background.
    ///
    /// Failures are logged and do not surface to the caller; the processor
    /// references stay unset until a later write retries the mirror.
    fn spawn_stripe_mirror(&self, product: Product) {
        let Some(gateway) = self.gateway.clone() else {
            return;
        };

        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let uuid = product.uuid;

            match gateway.sync_product(&product).await {
                Ok(refs) => {
                    if let Err(error) = store.set_stripe_refs(uuid, refs).await {
                        warn!(%uuid, %error, "failed to record processor references");
                    }
                }
                Err(error) => {
                    warn!(%uuid, %error, "failed to mirror product to the payment processor");
                }
            }
        });
    }
}

fn matches_subcategory(product: &Product, filter: &str) -> bool {
    product.subcategory.as_ref().is_some_and(|subcategory| {
        subcategory.name == filter || subcategory.uuid.to_string() == filter
    })
}

#[async_trait]
impl ProductsService for DefaultProductsService {
    async fn list(
        &self,
        category: Option<Category>,
        subcategory: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut products = self.store.list(category).await?;

        if let Some(filter) = subcategory {
            products.retain(|product| matches_subcategory(product, &filter));
        }

        Ok(products)
    }

    async fn get(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        Ok(self.store.get(product).await?)
    }

    async fn create(&self, new: NewProduct) -> Result<Product, ProductsServiceError> {
        if new.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingName);
        }

        if new.price.is_sign_negative() {
            return Err(ProductsServiceError::InvalidPrice);
        }

        let images = new.images.unwrap_or_default();

        if images.len() > MAX_IMAGES {
            return Err(ProductsServiceError::TooManyImages);
        }

        let subcategory = match new.subcategory {
            Some(uuid) => Some(self.resolve_subcategory(uuid, new.category).await?),
            None => None,
        };

        let draft = ProductDraft {
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            subcategory,
            stock: new.stock.unwrap_or(0),
            featured: false,
            images,
        };

        let product = self.store.create(draft).await?;

        self.spawn_stripe_mirror(product.clone());

        Ok(product)
    }

    async fn update(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if update.name.as_ref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductsServiceError::MissingName);
        }

        if update.price.is_some_and(|price| price.is_sign_negative()) {
            return Err(ProductsServiceError::InvalidPrice);
        }

        if update
            .images
            .as_ref()
            .is_some_and(|images| images.len() > MAX_IMAGES)
        {
            return Err(ProductsServiceError::TooManyImages);
        }

        let current = self.store.get(product).await?;

        // Category checks run against the value the row will hold after the
        // merge, not the one it holds now.
        let effective_category = update.category.unwrap_or(current.category);

        let subcategory = match update.subcategory {
            None => None,
            Some(None) => Some(None),
            Some(Some(uuid)) => Some(Some(
                self.resolve_subcategory(uuid, effective_category).await?,
            )),
        };

        // A category change invalidates a kept subcategory reference from the
        // old category; the caller must clear or replace it in the same call.
        if let Some(new_category) = update.category
            && new_category != current.category
            && subcategory.is_none()
            && current.subcategory.is_some()
        {
            return Err(ProductsServiceError::CategoryMismatch);
        }

        let changes = ProductChanges {
            name: update.name,
            description: update.description,
            price: update.price,
            category: update.category,
            subcategory,
            stock: update.stock,
            featured: update.featured,
            images: update.images,
        };

        let updated = self.store.update(product, changes).await?;

        self.spawn_stripe_mirror(updated.clone());

        Ok(updated)
    }

    async fn delete(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        Ok(self.store.delete(product).await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Products in insertion order, optionally narrowed by category and by
    /// subcategory. The subcategory filter accepts either the cached display
    /// name or the uuid in string form.
    async fn list(
        &self,
        category: Option<Category>,
        subcategory: Option<String>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    async fn get(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Validate and insert a product, then mirror it to the payment
    /// processor in the background when a gateway is configured.
    async fn create(&self, new: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Merge `update` into the stored product. `None` fields keep their
    /// stored values; doubly-optional fields clear on `Some(None)`.
    async fn update(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    async fn delete(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::{
        products::memory::MemoryProductStore,
        subcategories::{MockSubcategoryStore, memory::MemorySubcategoryStore, models::NewSubcategory},
    };

    use super::*;

    struct Fixture {
        service: DefaultProductsService,
        subcategories: Arc<MemorySubcategoryStore>,
    }

    fn fixture() -> Fixture {
        let subcategories = Arc::new(MemorySubcategoryStore::new());

        Fixture {
            service: DefaultProductsService::new(
                Arc::new(MemoryProductStore::new()),
                Arc::clone(&subcategories) as Arc<dyn SubcategoryStore>,
                None,
            ),
            subcategories,
        }
    }

    fn new_product(name: &str, category: Category) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Decimal::from(25),
            category,
            subcategory: None,
            stock: None,
            images: None,
        }
    }

    #[tokio::test]
    async fn create_applies_catalog_defaults() -> TestResult {
        let fixture = fixture();

        let product = fixture
            .service
            .create(new_product("Lavender Soap", Category::Natural))
            .await?;

        assert_eq!(product.stock, 0);
        assert!(!product.featured);
        assert!(product.images.is_empty());
        assert!(product.stripe_product_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let result = fixture()
            .service
            .create(new_product("   ", Category::Natural))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingName)),
            "expected MissingName, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let mut new = new_product("Soap", Category::Natural);
        new.price = Decimal::from(-1);

        let result = fixture().service.create(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice)),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_too_many_images() {
        let mut new = new_product("Soap", Category::Natural);
        new.images = Some(vec!["img".to_string(); MAX_IMAGES + 1]);

        let result = fixture().service.create(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::TooManyImages)),
            "expected TooManyImages, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_resolves_subcategory_reference() -> TestResult {
        let fixture = fixture();

        let subcategory = fixture
            .subcategories
            .create(NewSubcategory {
                name: "Soaps".to_string(),
                category: Category::Natural,
            })
            .await?;

        let mut new = new_product("Lavender Soap", Category::Natural);
        new.subcategory = Some(subcategory.uuid);

        let product = fixture.service.create(new).await?;

        let reference = product.subcategory.ok_or("missing subcategory")?;
        assert_eq!(reference.uuid, subcategory.uuid);
        assert_eq!(reference.name, "Soaps");

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_subcategory() {
        let mut new = new_product("Soap", Category::Natural);
        new.subcategory = Some(SubcategoryUuid::new());

        let result = fixture().service.create(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::UnknownSubcategory)),
            "expected UnknownSubcategory, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_surfaces_subcategory_store_failure() {
        let mut subcategories = MockSubcategoryStore::new();
        subcategories
            .expect_get()
            .returning(|_| Err(StoreError::Sql(sqlx::Error::WorkerCrashed)));

        let service = DefaultProductsService::new(
            Arc::new(MemoryProductStore::new()),
            Arc::new(subcategories),
            None,
        );

        let mut new = new_product("Soap", Category::Natural);
        new.subcategory = Some(SubcategoryUuid::new());

        let result = service.create(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::Store(_))),
            "expected Store, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_rejects_cross_category_subcategory() -> TestResult {
        let fixture = fixture();

        let subcategory = fixture
            .subcategories
            .create(NewSubcategory {
                name: "Mugs".to_string(),
                category: Category::Custom,
            })
            .await?;

        let mut new = new_product("Soap", Category::Natural);
        new.subcategory = Some(subcategory.uuid);

        let result = fixture.service.create(new).await;

        assert!(
            matches!(result, Err(ProductsServiceError::CategoryMismatch)),
            "expected CategoryMismatch, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_category_and_subcategory() -> TestResult {
        let fixture = fixture();

        let subcategory = fixture
            .subcategories
            .create(NewSubcategory {
                name: "Soaps".to_string(),
                category: Category::Natural,
            })
            .await?;

        let mut soap = new_product("Lavender Soap", Category::Natural);
        soap.subcategory = Some(subcategory.uuid);

        fixture.service.create(soap).await?;
        fixture
            .service
            .create(new_product("Honey Jar", Category::Natural))
            .await?;
        fixture
            .service
            .create(new_product("Custom Mug", Category::Custom))
            .await?;

        let natural = fixture.service.list(Some(Category::Natural), None).await?;
        assert_eq!(natural.len(), 2);

        let by_name = fixture
            .service
            .list(Some(Category::Natural), Some("Soaps".to_string()))
            .await?;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Lavender Soap");

        let by_uuid = fixture
            .service
            .list(None, Some(subcategory.uuid.to_string()))
            .await?;
        assert_eq!(by_uuid.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_merges_and_clears_fields() -> TestResult {
        let fixture = fixture();

        let mut new = new_product("Soap", Category::Natural);
        new.description = Some("Hand made".to_string());

        let created = fixture.service.create(new).await?;

        let updated = fixture
            .service
            .update(
                created.uuid,
                ProductUpdate {
                    price: Some(Decimal::new(1999, 2)),
                    description: Some(None),
                    featured: Some(true),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Soap");
        assert_eq!(updated.price, Decimal::new(1999, 2));
        assert!(updated.description.is_none());
        assert!(updated.featured);

        Ok(())
    }

    #[tokio::test]
    async fn update_category_with_stale_subcategory_is_rejected() -> TestResult {
        let fixture = fixture();

        let subcategory = fixture
            .subcategories
            .create(NewSubcategory {
                name: "Soaps".to_string(),
                category: Category::Natural,
            })
            .await?;

        let mut new = new_product("Soap", Category::Natural);
        new.subcategory = Some(subcategory.uuid);

        let created = fixture.service.create(new).await?;

        let result = fixture
            .service
            .update(
                created.uuid,
                ProductUpdate {
                    category: Some(Category::Custom),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::CategoryMismatch)),
            "expected CategoryMismatch, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_returns_not_found() {
        let result = fixture()
            .service
            .update(ProductUuid::new(), ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_removes_row() -> TestResult {
        let fixture = fixture();

        let created = fixture
            .service
            .create(new_product("Soap", Category::Natural))
            .await?;

        fixture.service.delete(created.uuid).await?;

        assert!(fixture.service.list(None, None).await?.is_empty());

        Ok(())
    }
}
