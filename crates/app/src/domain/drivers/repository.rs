//! Drivers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::drivers::{
    data::NewDriver,
    records::{DriverRecord, DriverStatus, DriverUuid},
};

const CREATE_DRIVER_SQL: &str = include_str!("sql/create_driver.sql");
const LIST_DRIVERS_SQL: &str = include_str!("sql/list_drivers.sql");
const DELETE_DRIVER_SQL: &str = include_str!("sql/delete_driver.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDriversRepository;

impl PgDriversRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_driver(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        driver: &NewDriver,
        username: &str,
    ) -> Result<DriverRecord, sqlx::Error> {
        query_as::<Postgres, DriverRecord>(CREATE_DRIVER_SQL)
            .bind(driver.uuid.into_uuid())
            .bind(&driver.first_name)
            .bind(&driver.last_name)
            .bind(username)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_drivers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DriverRecord>, sqlx::Error> {
        query_as::<Postgres, DriverRecord>(LIST_DRIVERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_driver(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        driver: DriverUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DRIVER_SQL)
            .bind(driver.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for DriverRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status: DriverStatus = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: DriverUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            username: row.try_get("username")?,
            status,
            started_at: row.try_get::<SqlxTimestamp, _>("started_at")?.to_jiff(),
        })
    }
}
