//! Postgres order store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{
    FromRow, PgPool, Row,
    postgres::PgRow,
    query_as,
    types::Json,
};

use crate::{
    domain::orders::{
        models::{
            Customer, FulfillmentStatus, Order, OrderDraft, OrderItem, OrderUuid,
            PaymentStatus, PaymentUpdate,
        },
        repository::OrderStore,
    },
    store::StoreError,
};

const LIST_SQL: &str = "SELECT * FROM orders ORDER BY created_at DESC";
const GET_SQL: &str = "SELECT * FROM orders WHERE uuid = $1";
const FIND_BY_INTENT_SQL: &str = "SELECT * FROM orders WHERE payment_intent_id = $1";
const CREATE_SQL: &str = "INSERT INTO orders \
     (uuid, order_number, customer_name, customer_email, customer_phone, customer_address, \
      items, total_amount, status, payment_status, payment_method, card_last4, \
      payment_intent_id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING *";
const UPDATE_STATUS_SQL: &str =
    "UPDATE orders SET status = $2 WHERE uuid = $1 RETURNING *";
const UPDATE_PAYMENT_SQL: &str = "UPDATE orders SET \
     payment_status = COALESCE($2, payment_status), \
     payment_method = COALESCE($3, payment_method), \
     card_last4 = COALESCE($4, card_last4), \
     payment_intent_id = COALESCE($5, payment_intent_id) \
     WHERE uuid = $1 RETURNING *";
const DELETE_SQL: &str = "DELETE FROM orders WHERE uuid = $1 RETURNING *";

/// Order store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        Ok(query_as::<_, Order>(LIST_SQL).fetch_all(&self.pool).await?)
    }

    async fn get(&self, order: OrderUuid) -> Result<Order, StoreError> {
        Ok(query_as::<_, Order>(GET_SQL)
            .bind(order.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_by_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<Option<Order>, StoreError> {
        Ok(query_as::<_, Order>(FIND_BY_INTENT_SQL)
            .bind(intent_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        Ok(query_as::<_, Order>(CREATE_SQL)
            .bind(OrderUuid::new().into_uuid())
            .bind(&draft.order_number)
            .bind(&draft.customer.name)
            .bind(&draft.customer.email)
            .bind(&draft.customer.phone)
            .bind(&draft.customer.address)
            .bind(Json(&draft.items))
            .bind(draft.total_amount)
            .bind(draft.status.as_str())
            .bind(draft.payment_status.as_str())
            .bind(&draft.payment_method)
            .bind(&draft.card_last4)
            .bind(&draft.payment_intent_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: FulfillmentStatus,
    ) -> Result<Order, StoreError> {
        Ok(query_as::<_, Order>(UPDATE_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_payment(
        &self,
        order: OrderUuid,
        update: PaymentUpdate,
    ) -> Result<Order, StoreError> {
        Ok(query_as::<_, Order>(UPDATE_PAYMENT_SQL)
            .bind(order.into_uuid())
            .bind(update.payment_status.map(PaymentStatus::as_str))
            .bind(&update.payment_method)
            .bind(&update.card_last4)
            .bind(&update.payment_intent_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete(&self, order: OrderUuid) -> Result<Order, StoreError> {
        Ok(query_as::<_, Order>(DELETE_SQL)
            .bind(order.into_uuid())
            .fetch_one(&self.pool)
            .await?)
    }
}

fn decode_status<T>(row: &PgRow, column: &str) -> sqlx::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;

    raw.parse().map_err(|e: T::Err| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(items): Json<Vec<OrderItem>> = row.try_get("items")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            customer: Customer {
                name: row.try_get("customer_name")?,
                email: row.try_get("customer_email")?,
                phone: row.try_get("customer_phone")?,
                address: row.try_get("customer_address")?,
            },
            items,
            total_amount: row.try_get::<Decimal, _>("total_amount")?,
            status: decode_status(row, "status")?,
            payment_status: decode_status(row, "payment_status")?,
            payment_method: row.try_get("payment_method")?,
            card_last4: row.try_get("card_last4")?,
            payment_intent_id: row.try_get("payment_intent_id")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
