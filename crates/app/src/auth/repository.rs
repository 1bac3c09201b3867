//! Auth Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        models::{AccessTokenMetadata, ActiveAccessToken, NewAccessToken},
        token::AccessTokenVersion,
    },
    domain::staff::records::{StaffRole, StaffUuid},
};

const CREATE_ACCESS_TOKEN_SQL: &str = include_str!("sql/create_access_token.sql");
const FIND_ACTIVE_ACCESS_TOKEN_SQL: &str = include_str!("sql/find_active_access_token.sql");
const LIST_ACCESS_TOKENS_SQL: &str = include_str!("sql/list_access_tokens.sql");
const REVOKE_ACCESS_TOKEN_SQL: &str = include_str!("sql/revoke_access_token.sql");
const TOUCH_ACCESS_TOKEN_SQL: &str = include_str!("sql/touch_access_token.sql");

#[derive(Debug, Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_access_token(
        &self,
        token: &NewAccessToken,
    ) -> Result<AccessTokenMetadata, sqlx::Error> {
        query_as::<_, AccessTokenMetadata>(CREATE_ACCESS_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.staff_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(token.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_active_access_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<ActiveAccessToken>, sqlx::Error> {
        query_as::<_, ActiveAccessToken>(FIND_ACTIVE_ACCESS_TOKEN_SQL)
            .bind(token_uuid)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_access_tokens(
        &self,
        staff: StaffUuid,
    ) -> Result<Vec<AccessTokenMetadata>, sqlx::Error> {
        query_as::<_, AccessTokenMetadata>(LIST_ACCESS_TOKENS_SQL)
            .bind(staff.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn revoke_access_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<AccessTokenMetadata>, sqlx::Error> {
        query_as::<_, AccessTokenMetadata>(REVOKE_ACCESS_TOKEN_SQL)
            .bind(token_uuid)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn mark_access_token_used(
        &self,
        token_uuid: Uuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_ACCESS_TOKEN_SQL)
            .bind(token_uuid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn try_get_version(row: &PgRow) -> Result<AccessTokenVersion, sqlx::Error> {
    let version: i16 = row.try_get("version")?;

    AccessTokenVersion::try_from(version).map_err(|e| sqlx::Error::ColumnDecode {
        index: "version".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for ActiveAccessToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        let role: StaffRole = role.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            staff_uuid: StaffUuid::from_uuid(row.try_get("staff_uuid")?),
            role,
            version: try_get_version(row)?,
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AccessTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            staff_uuid: StaffUuid::from_uuid(row.try_get("staff_uuid")?),
            version: try_get_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
