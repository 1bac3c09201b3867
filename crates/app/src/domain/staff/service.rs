//! Staff service.

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;

use crate::{
    database::Db,
    domain::staff::{
        data::NewStaff,
        errors::StaffServiceError,
        records::{StaffRecord, StaffUuid},
        repository::PgStaffRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgStaffService {
    db: Db,
    repository: PgStaffRepository,
}

impl PgStaffService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStaffRepository::new(),
        }
    }
}

#[async_trait]
impl StaffService for PgStaffService {
    async fn create_staff(&self, staff: NewStaff) -> Result<StaffRecord, StaffServiceError> {
        let username = account_username(&staff.name);

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_staff(&mut tx, &staff, &username)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_staff(&self) -> Result<Vec<StaffRecord>, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let staff = self.repository.list_staff(&mut tx).await?;

        tx.commit().await?;

        Ok(staff)
    }

    async fn delete_staff(&self, staff: StaffUuid) -> Result<(), StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_staff(&mut tx, staff).await?;

        if rows_affected == 0 {
            return Err(StaffServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Create an operator account with a generated username.
    async fn create_staff(&self, staff: NewStaff) -> Result<StaffRecord, StaffServiceError>;

    /// List all operator accounts.
    async fn list_staff(&self) -> Result<Vec<StaffRecord>, StaffServiceError>;

    /// Remove an operator account.
    async fn delete_staff(&self, staff: StaffUuid) -> Result<(), StaffServiceError>;
}

// Surname plus two random digits, falling back to the whole name for
// single-word names.
fn account_username(name: &str) -> String {
    let base = name.split_whitespace().last().unwrap_or(name);
    let suffix = rand::thread_rng().gen_range(10..100_u8);

    format!("{}{suffix}", base.to_lowercase())
}
