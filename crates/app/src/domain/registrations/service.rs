//! Registrations service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        registrations::{
            data::{Decision, NewRegistration},
            errors::RegistrationsServiceError,
            records::{RegistrationRecord, RegistrationStatus, RegistrationUuid},
            repository::PgRegistrationsRepository,
        },
        restaurants::{data::NewRestaurant, records::RestaurantUuid, repository::PgRestaurantsRepository},
        staff::records::StaffUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRegistrationsService {
    db: Db,
    registrations_repository: PgRegistrationsRepository,
    restaurants_repository: PgRestaurantsRepository,
}

impl PgRegistrationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            registrations_repository: PgRegistrationsRepository::new(),
            restaurants_repository: PgRestaurantsRepository::new(),
        }
    }
}

#[async_trait]
impl RegistrationsService for PgRegistrationsService {
    async fn submit(
        &self,
        registration: NewRegistration,
    ) -> Result<RegistrationRecord, RegistrationsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .registrations_repository
            .create_registration(&mut tx, &registration)
            .await?;

        tx.commit().await?;

        info!(registration = %created.uuid, name = %created.restaurant_name, "registration submitted");

        Ok(created)
    }

    async fn list_registrations(
        &self,
        status: Option<RegistrationStatus>,
    ) -> Result<Vec<RegistrationRecord>, RegistrationsServiceError> {
        let mut tx = self.db.begin().await?;

        let registrations = self
            .registrations_repository
            .list_registrations(&mut tx, status)
            .await?;

        tx.commit().await?;

        Ok(registrations)
    }

    async fn decide(
        &self,
        uuid: RegistrationUuid,
        decision: Decision,
        reviewer: StaffUuid,
    ) -> Result<RegistrationRecord, RegistrationsServiceError> {
        let mut tx = self.db.begin().await?;

        let decided = self
            .registrations_repository
            .decide_registration(&mut tx, uuid, decision, reviewer)
            .await?;

        let Some(decided) = decided else {
            // The guarded update matched nothing: the registration is
            // either missing or no longer pending.
            let _existing = self
                .registrations_repository
                .get_registration(&mut tx, uuid)
                .await?;

            return Err(RegistrationsServiceError::AlreadyDecided);
        };

        // Approval opens the restaurant in the same transaction, so a
        // decided registration without a storefront row cannot exist.
        if decision == Decision::Approved {
            self.restaurants_repository
                .create_restaurant(&mut tx, &storefront_entry(&decided))
                .await?;
        }

        tx.commit().await?;

        info!(registration = %uuid, decision = decision.as_str(), "registration decided");

        Ok(decided)
    }
}

#[automock]
#[async_trait]
pub trait RegistrationsService: Send + Sync {
    /// Record a new onboarding submission in the pending state.
    async fn submit(
        &self,
        registration: NewRegistration,
    ) -> Result<RegistrationRecord, RegistrationsServiceError>;

    /// List submissions, optionally narrowed to one review state.
    async fn list_registrations(
        &self,
        status: Option<RegistrationStatus>,
    ) -> Result<Vec<RegistrationRecord>, RegistrationsServiceError>;

    /// Record an admin's verdict. Approval also creates the restaurant.
    async fn decide(
        &self,
        uuid: RegistrationUuid,
        decision: Decision,
        reviewer: StaffUuid,
    ) -> Result<RegistrationRecord, RegistrationsServiceError>;
}

fn storefront_entry(registration: &RegistrationRecord) -> NewRestaurant {
    NewRestaurant {
        uuid: RestaurantUuid::new(),
        name: registration.restaurant_name.clone(),
        cuisine: registration.cuisine.clone(),
        address: registration.address.clone(),
        city: registration.city.clone(),
        state: registration.state.clone(),
        zip_code: registration.zip_code.clone(),
        phone: registration.phone.clone(),
        email: registration.email.clone(),
        description: registration.description.clone(),
        opening_time: registration.opening_time,
        closing_time: registration.closing_time,
        image_url: registration.logo_url.clone(),
    }
}
