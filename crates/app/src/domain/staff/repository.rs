//! Staff Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::staff::{
    data::NewStaff,
    records::{StaffRecord, StaffRole, StaffUuid},
};

const CREATE_STAFF_SQL: &str = include_str!("sql/create_staff.sql");
const LIST_STAFF_SQL: &str = include_str!("sql/list_staff.sql");
const DELETE_STAFF_SQL: &str = include_str!("sql/delete_staff.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStaffRepository;

impl PgStaffRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: &NewStaff,
        username: &str,
    ) -> Result<StaffRecord, sqlx::Error> {
        query_as::<Postgres, StaffRecord>(CREATE_STAFF_SQL)
            .bind(staff.uuid.into_uuid())
            .bind(&staff.name)
            .bind(username)
            .bind(staff.role.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<StaffRecord>, sqlx::Error> {
        query_as::<Postgres, StaffRecord>(LIST_STAFF_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_STAFF_SQL)
            .bind(staff.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for StaffRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        let role: StaffRole = role.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: StaffUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            username: row.try_get("username")?,
            role,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
        })
    }
}
