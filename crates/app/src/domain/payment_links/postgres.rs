//! Postgres payment link store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query_as};

use crate::{
    domain::payment_links::{
        models::{PaymentLink, PaymentLinkDraft, PaymentLinkUuid},
        repository::PaymentLinkStore,
    },
    store::StoreError,
};

const LIST_SQL: &str = "SELECT * FROM payment_links ORDER BY created_at DESC";
const CREATE_SQL: &str = "INSERT INTO payment_links \
     (uuid, name, description, amount, currency, url) \
     VALUES ($1, $2, $3, $4, $5, $6) RETURNING *";
const DELETE_SQL: &str = "DELETE FROM payment_links WHERE uuid = $1 RETURNING *";

/// Payment link store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgPaymentLinkStore {
    pool: PgPool,
}

impl PgPaymentLinkStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentLinkStore for PgPaymentLinkStore {
    async fn list(&self) -> Result<Vec<PaymentLink>, StoreError> {
        Ok(query_as::<_, PaymentLink>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create(&self, draft: PaymentLinkDraft) -> Result<PaymentLink, StoreError> {
        Ok(query_as::<_, PaymentLink>(CREATE_SQL)
            .bind(draft.uuid.into_uuid())
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.amount)
            .bind(&draft.currency)
            .bind(&draft.url)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete(&self, link: PaymentLinkUuid) -> Result<PaymentLink, StoreError> {
        Ok(query_as::<_, PaymentLink>(DELETE_SQL)
            .bind(link.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentLink {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PaymentLinkUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            amount: row.try_get::<Decimal, _>("amount")?,
            currency: row.try_get("currency")?,
            url: row.try_get("url")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
