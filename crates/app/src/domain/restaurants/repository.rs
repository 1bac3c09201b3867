//! Restaurants Repository

use jiff_sqlx::{Time as SqlxTime, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::restaurants::{
    data::NewRestaurant,
    records::{RestaurantRecord, RestaurantStatus, RestaurantUuid},
};

const LIST_ACTIVE_RESTAURANTS_SQL: &str = include_str!("sql/list_active_restaurants.sql");
const GET_RESTAURANT_SQL: &str = include_str!("sql/get_restaurant.sql");
const CREATE_RESTAURANT_SQL: &str = include_str!("sql/create_restaurant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRestaurantsRepository;

impl PgRestaurantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RestaurantRecord>, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(LIST_ACTIVE_RESTAURANTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(GET_RESTAURANT_SQL)
            .bind(restaurant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_restaurant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, sqlx::Error> {
        query_as::<Postgres, RestaurantRecord>(CREATE_RESTAURANT_SQL)
            .bind(restaurant.uuid.into_uuid())
            .bind(&restaurant.name)
            .bind(&restaurant.cuisine)
            .bind(&restaurant.address)
            .bind(&restaurant.city)
            .bind(&restaurant.state)
            .bind(&restaurant.zip_code)
            .bind(&restaurant.phone)
            .bind(&restaurant.email)
            .bind(&restaurant.description)
            .bind(SqlxTime::from(restaurant.opening_time))
            .bind(SqlxTime::from(restaurant.closing_time))
            .bind(restaurant.image_url.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RestaurantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status: RestaurantStatus = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: RestaurantUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            cuisine: row.try_get("cuisine")?,
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            description: row.try_get("description")?,
            opening_time: row.try_get::<SqlxTime, _>("opening_time")?.to_jiff(),
            closing_time: row.try_get::<SqlxTime, _>("closing_time")?.to_jiff(),
            rating: row.try_get("rating")?,
            delivery_estimate: row.try_get("delivery_estimate")?,
            image_url: row.try_get("image_url")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
