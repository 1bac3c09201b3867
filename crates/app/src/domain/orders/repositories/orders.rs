//! Orders Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    drivers::records::DriverUuid,
    orders::{
        data::{NewOrder, OrderFilter, StatusChange},
        records::{OrderRecord, OrderUuid},
        repositories::{encode_amount, try_get_amount, try_get_parsed},
    },
    restaurants::records::RestaurantUuid,
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");
const ASSIGN_DRIVER_SQL: &str = include_str!("../sql/assign_driver.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
        estimated_delivery: Timestamp,
    ) -> Result<OrderRecord, sqlx::Error> {
        let quote = order.draft.quote;

        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(&order.draft.order_number)
            .bind(order.draft.restaurant)
            .bind(order.draft.payment.as_str())
            .bind(&order.draft.email)
            .bind(&order.draft.shipping.first_name)
            .bind(&order.draft.shipping.last_name)
            .bind(&order.draft.shipping.address)
            .bind(&order.draft.shipping.city)
            .bind(&order.draft.shipping.state)
            .bind(&order.draft.shipping.zip_code)
            .bind(&order.draft.shipping.phone)
            .bind(encode_amount("subtotal", quote.subtotal)?)
            .bind(encode_amount("delivery_fee", quote.delivery_fee)?)
            .bind(encode_amount("service_charge", quote.service_charge)?)
            .bind(encode_amount("tax", quote.tax_and_fees)?)
            .bind(encode_amount("total", quote.total)?)
            .bind(SqlxTimestamp::from(estimated_delivery))
            .bind(SqlxTimestamp::from(order.placed_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(filter.status.map(|status| status.as_str()))
            .bind(filter.restaurant.map(RestaurantUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        change: &StatusChange,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(change.to.as_str())
            .bind(change.estimated_delivery.map(SqlxTimestamp::from))
            .bind(change.expected.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn assign_driver(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        driver: DriverUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(ASSIGN_DRIVER_SQL)
            .bind(order.into_uuid())
            .bind(driver.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            restaurant_uuid: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            driver_uuid: row
                .try_get::<Option<Uuid>, _>("driver_uuid")?
                .map(DriverUuid::from_uuid),
            status: try_get_parsed(row, "status")?,
            email: row.try_get("email")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            delivery_address: row.try_get("delivery_address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            phone: row.try_get("phone")?,
            subtotal: try_get_amount(row, "subtotal")?,
            delivery_fee: try_get_amount(row, "delivery_fee")?,
            service_charge: try_get_amount(row, "service_charge")?,
            tax: try_get_amount(row, "tax")?,
            total: try_get_amount(row, "total")?,
            payment_method: try_get_parsed(row, "payment_method")?,
            estimated_delivery: row
                .try_get::<SqlxTimestamp, _>("estimated_delivery")?
                .to_jiff(),
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
