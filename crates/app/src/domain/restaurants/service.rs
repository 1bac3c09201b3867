//! Restaurants service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::restaurants::{
        errors::RestaurantsServiceError,
        records::{RestaurantRecord, RestaurantUuid},
        repository::PgRestaurantsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgRestaurantsService {
    db: Db,
    repository: PgRestaurantsRepository,
}

impl PgRestaurantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl RestaurantsService for PgRestaurantsService {
    async fn list_active(&self) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError> {
        let mut tx = self.db.begin().await?;

        let restaurants = self.repository.list_active(&mut tx).await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError> {
        let mut tx = self.db.begin().await?;

        let restaurant = self.repository.get_restaurant(&mut tx, restaurant).await?;

        tx.commit().await?;

        Ok(restaurant)
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// List restaurants visible in the storefront.
    async fn list_active(&self) -> Result<Vec<RestaurantRecord>, RestaurantsServiceError>;

    /// Retrieve a single restaurant.
    async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<RestaurantRecord, RestaurantsServiceError>;
}
