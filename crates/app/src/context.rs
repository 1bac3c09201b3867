//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService, TokenHasher},
    database::{self, Db},
    domain::{
        drivers::{DriversService, PgDriversService},
        orders::{OrdersService, PgOrdersService},
        registrations::{PgRegistrationsService, RegistrationsService},
        restaurants::{PgRestaurantsService, RestaurantsService},
        staff::{PgStaffService, StaffService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Every service the HTTP layer and CLI reach the domain through. Built
/// once at startup and passed explicitly; there is no ambient global
/// state to initialize or tear down.
#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub restaurants: Arc<dyn RestaurantsService>,
    pub registrations: Arc<dyn RegistrationsService>,
    pub drivers: Arc<dyn DriversService>,
    pub staff: Arc<dyn StaffService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        hasher: TokenHasher,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            orders: Arc::new(PgOrdersService::new(db.clone())),
            restaurants: Arc::new(PgRestaurantsService::new(db.clone())),
            registrations: Arc::new(PgRegistrationsService::new(db.clone())),
            drivers: Arc::new(PgDriversService::new(db.clone())),
            staff: Arc::new(PgStaffService::new(db)),
            auth: Arc::new(PgAuthService::new(pool, hasher)),
        })
    }
}
