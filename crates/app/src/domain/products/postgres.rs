//! Postgres product store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        Category,
        products::{
            models::{Product, ProductChanges, ProductDraft, ProductUuid, SubcategoryRef},
            repository::ProductStore,
        },
        subcategories::postgres::decode_category,
    },
    payments::StripeProductRefs,
    store::StoreError,
};

const LIST_SQL: &str = "SELECT * FROM products ORDER BY created_at";
const LIST_BY_CATEGORY_SQL: &str =
    "SELECT * FROM products WHERE category = $1 ORDER BY created_at";
const GET_SQL: &str = "SELECT * FROM products WHERE uuid = $1";
const CREATE_SQL: &str = "INSERT INTO products \
     (uuid, name, description, price, category, subcategory_uuid, subcategory_name, \
      stock, featured, images) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *";
// Doubly-optional fields travel as a set-flag plus a nullable value so a
// merge can distinguish "leave alone" from "clear".
const UPDATE_SQL: &str = "UPDATE products SET \
     name = COALESCE($2, name), \
     description = CASE WHEN $3 THEN $4 ELSE description END, \
     price = COALESCE($5, price), \
     category = COALESCE($6, category), \
     subcategory_uuid = CASE WHEN $7 THEN $8 ELSE subcategory_uuid END, \
     subcategory_name = CASE WHEN $7 THEN $9 ELSE subcategory_name END, \
     stock = COALESCE($10, stock), \
     featured = COALESCE($11, featured), \
     images = COALESCE($12, images), \
     updated_at = now() \
     WHERE uuid = $1 RETURNING *";
const DELETE_SQL: &str = "DELETE FROM products WHERE uuid = $1 RETURNING *";
const SET_STRIPE_REFS_SQL: &str =
    "UPDATE products SET stripe_product_id = $2, stripe_price_id = $3 WHERE uuid = $1";

/// Product store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self, category: Option<Category>) -> Result<Vec<Product>, StoreError> {
        let rows = match category {
            Some(category) => {
                query_as::<_, Product>(LIST_BY_CATEGORY_SQL)
                    .bind(category.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => query_as::<_, Product>(LIST_SQL).fetch_all(&self.pool).await?,
        };

        Ok(rows)
    }

    async fn get(&self, product: ProductUuid) -> Result<Product, StoreError> {
        Ok(query_as::<_, Product>(GET_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let stock = i64::from(draft.stock);

        Ok(query_as::<_, Product>(CREATE_SQL)
            .bind(ProductUuid::new().into_uuid())
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .bind(draft.category.as_str())
            .bind(draft.subcategory.as_ref().map(|s| s.uuid.into_uuid()))
            .bind(draft.subcategory.as_ref().map(|s| s.name.clone()))
            .bind(stock)
            .bind(draft.featured)
            .bind(&draft.images)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(
        &self,
        product: ProductUuid,
        changes: ProductChanges,
    ) -> Result<Product, StoreError> {
        let subcategory = changes.subcategory.as_ref().and_then(Option::as_ref);

        Ok(query_as::<_, Product>(UPDATE_SQL)
            .bind(product.into_uuid())
            .bind(&changes.name)
            .bind(changes.description.is_some())
            .bind(changes.description.clone().flatten())
            .bind(changes.price)
            .bind(changes.category.map(Category::as_str))
            .bind(changes.subcategory.is_some())
            .bind(subcategory.map(|s| s.uuid.into_uuid()))
            .bind(subcategory.map(|s| s.name.clone()))
            .bind(changes.stock.map(i64::from))
            .bind(changes.featured)
            .bind(&changes.images)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete(&self, product: ProductUuid) -> Result<Product, StoreError> {
        Ok(query_as::<_, Product>(DELETE_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn set_stripe_refs(
        &self,
        product: ProductUuid,
        refs: StripeProductRefs,
    ) -> Result<(), StoreError> {
        let result = query(SET_STRIPE_REFS_SQL)
            .bind(product.into_uuid())
            .bind(&refs.product_id)
            .bind(&refs.price_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stock_raw: i64 = row.try_get("stock")?;

        let stock = u32::try_from(stock_raw).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock".to_string(),
            source: Box::new(e),
        })?;

        let subcategory = match (
            row.try_get::<Option<Uuid>, _>("subcategory_uuid")?,
            row.try_get::<Option<String>, _>("subcategory_name")?,
        ) {
            (Some(uuid), Some(name)) => Some(SubcategoryRef {
                uuid: uuid.into(),
                name,
            }),
            _ => None,
        };

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get::<Decimal, _>("price")?,
            category: decode_category(row, "category")?,
            subcategory,
            stock,
            featured: row.try_get("featured")?,
            images: row.try_get("images")?,
            stripe_product_id: row.try_get("stripe_product_id")?,
            stripe_price_id: row.try_get("stripe_price_id")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
