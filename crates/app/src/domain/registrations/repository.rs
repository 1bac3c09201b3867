//! Registrations Repository

use jiff_sqlx::{Time as SqlxTime, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    registrations::{
        data::{Decision, NewRegistration},
        records::{RegistrationRecord, RegistrationStatus, RegistrationUuid},
    },
    staff::records::StaffUuid,
};

const CREATE_REGISTRATION_SQL: &str = include_str!("sql/create_registration.sql");
const GET_REGISTRATION_SQL: &str = include_str!("sql/get_registration.sql");
const LIST_REGISTRATIONS_SQL: &str = include_str!("sql/list_registrations.sql");
const DECIDE_REGISTRATION_SQL: &str = include_str!("sql/decide_registration.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRegistrationsRepository;

impl PgRegistrationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_registration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, sqlx::Error> {
        query_as::<Postgres, RegistrationRecord>(CREATE_REGISTRATION_SQL)
            .bind(registration.uuid.into_uuid())
            .bind(&registration.restaurant_name)
            .bind(&registration.owner_first_name)
            .bind(&registration.owner_last_name)
            .bind(&registration.email)
            .bind(&registration.phone)
            .bind(&registration.cuisine)
            .bind(&registration.address)
            .bind(&registration.city)
            .bind(&registration.state)
            .bind(&registration.zip_code)
            .bind(&registration.description)
            .bind(SqlxTime::from(registration.opening_time))
            .bind(SqlxTime::from(registration.closing_time))
            .bind(&registration.menu_url)
            .bind(registration.logo_url.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_registration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: RegistrationUuid,
    ) -> Result<RegistrationRecord, sqlx::Error> {
        query_as::<Postgres, RegistrationRecord>(GET_REGISTRATION_SQL)
            .bind(registration.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_registrations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: Option<RegistrationStatus>,
    ) -> Result<Vec<RegistrationRecord>, sqlx::Error> {
        query_as::<Postgres, RegistrationRecord>(LIST_REGISTRATIONS_SQL)
            .bind(status.map(RegistrationStatus::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn decide_registration(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        registration: RegistrationUuid,
        decision: Decision,
        reviewer: StaffUuid,
    ) -> Result<Option<RegistrationRecord>, sqlx::Error> {
        query_as::<Postgres, RegistrationRecord>(DECIDE_REGISTRATION_SQL)
            .bind(registration.into_uuid())
            .bind(decision.as_str())
            .bind(reviewer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RegistrationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status: RegistrationStatus = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: RegistrationUuid::from_uuid(row.try_get("uuid")?),
            restaurant_name: row.try_get("restaurant_name")?,
            owner_first_name: row.try_get("owner_first_name")?,
            owner_last_name: row.try_get("owner_last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            cuisine: row.try_get("cuisine")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            description: row.try_get("description")?,
            opening_time: row.try_get::<SqlxTime, _>("opening_time")?.to_jiff(),
            closing_time: row.try_get::<SqlxTime, _>("closing_time")?.to_jiff(),
            menu_url: row.try_get("menu_url")?,
            logo_url: row.try_get("logo_url")?,
            status,
            submitted_at: row.try_get::<SqlxTimestamp, _>("submitted_at")?.to_jiff(),
            decided_at: row
                .try_get::<Option<SqlxTimestamp>, _>("decided_at")?
                .map(SqlxTimestamp::to_jiff),
            reviewed_by: row
                .try_get::<Option<Uuid>, _>("reviewed_by")?
                .map(StaffUuid::from_uuid),
        })
    }
}
