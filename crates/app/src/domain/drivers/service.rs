//! Drivers service.

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;

use crate::{
    database::Db,
    domain::drivers::{
        data::NewDriver,
        errors::DriversServiceError,
        records::{DriverRecord, DriverUuid},
        repository::PgDriversRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgDriversService {
    db: Db,
    repository: PgDriversRepository,
}

impl PgDriversService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDriversRepository::new(),
        }
    }
}

#[async_trait]
impl DriversService for PgDriversService {
    async fn create_driver(&self, driver: NewDriver) -> Result<DriverRecord, DriversServiceError> {
        let username = roster_username(&driver.last_name);

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_driver(&mut tx, &driver, &username)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_drivers(&self) -> Result<Vec<DriverRecord>, DriversServiceError> {
        let mut tx = self.db.begin().await?;

        let drivers = self.repository.list_drivers(&mut tx).await?;

        tx.commit().await?;

        Ok(drivers)
    }

    async fn delete_driver(&self, driver: DriverUuid) -> Result<(), DriversServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_driver(&mut tx, driver).await?;

        if rows_affected == 0 {
            return Err(DriversServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DriversService: Send + Sync {
    /// Add a driver to the roster with a generated handle.
    async fn create_driver(&self, driver: NewDriver) -> Result<DriverRecord, DriversServiceError>;

    /// List the full roster.
    async fn list_drivers(&self) -> Result<Vec<DriverRecord>, DriversServiceError>;

    /// Remove a driver from the roster.
    async fn delete_driver(&self, driver: DriverUuid) -> Result<(), DriversServiceError>;
}

// "@garcia42" style handles, two random digits after the surname.
fn roster_username(last_name: &str) -> String {
    let suffix = rand::thread_rng().gen_range(10..100_u8);

    format!("@{}{suffix}", last_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_usernames_are_lowercased_with_two_digits() {
        let username = roster_username("Garcia");

        assert!(username.starts_with("@garcia"), "got {username}");
        assert_eq!(username.len(), "@garcia".len() + 2);
        assert!(
            username.trim_start_matches("@garcia").parse::<u8>().is_ok(),
            "suffix must be numeric, got {username}"
        );
    }
}
