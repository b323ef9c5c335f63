//! Postgres subcategory store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query_as};

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

const LIST_SQL: &str =
    "SELECT * FROM subcategories ORDER BY category, created_at";
const LIST_BY_CATEGORY_SQL: &str =
    "SELECT * FROM subcategories WHERE category = $1 ORDER BY created_at";
const GET_SQL: &str = "SELECT * FROM subcategories WHERE uuid = $1";
const FIND_BY_NAME_SQL: &str =
    "SELECT * FROM subcategories WHERE category = $1 AND name = $2";
const CREATE_SQL: &str = "INSERT INTO subcategories (uuid, name, category) \
     VALUES ($1, $2, $3) RETURNING *";
const RENAME_SQL: &str =
    "UPDATE subcategories SET name = $2 WHERE uuid = $1 RETURNING *";
const DELETE_SQL: &str = "DELETE FROM subcategories WHERE uuid = $1 RETURNING *";

/// Subcategory store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgSubcategoryStore {
    pool: PgPool,
}

impl PgSubcategoryStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubcategoryStore for PgSubcategoryStore {
    async fn list(&self) -> Result<Vec<Subcategory>, StoreError> {
        Ok(query_as::<_, Subcategory>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<Subcategory>, StoreError> {
        Ok(query_as::<_, Subcategory>(LIST_BY_CATEGORY_SQL)
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError> {
        Ok(query_as::<_, Subcategory>(GET_SQL)
            .bind(subcategory.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_by_name(
        &self,
        category: Category,
        name: &str,
    ) -> Result<Option<Subcategory>, StoreError> {
        Ok(query_as::<_, Subcategory>(FIND_BY_NAME_SQL)
            .bind(category.as_str())
            .bind(name)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, new: NewSubcategory) -> Result<Subcategory, StoreError> {
        Ok(query_as::<_, Subcategory>(CREATE_SQL)
            .bind(SubcategoryUuid::new().into_uuid())
            .bind(&new.name)
            .bind(new.category.as_str())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn rename(
        &self,
        subcategory: SubcategoryUuid,
        name: String,
    ) -> Result<Subcategory, StoreError> {
        Ok(query_as::<_, Subcategory>(RENAME_SQL)
            .bind(subcategory.into_uuid())
            .bind(&name)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete(&self, subcategory: SubcategoryUuid) -> Result<Subcategory, StoreError> {
        Ok(query_as::<_, Subcategory>(DELETE_SQL)
            .bind(subcategory.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for Subcategory {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubcategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            category: decode_category(row, "category")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

/// Decode a category column, mapping unknown labels to a column decode
/// error.
pub(crate) fn decode_category(row: &PgRow, column: &str) -> sqlx::Result<Category> {
    let label: String = row.try_get(column)?;

    label.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
