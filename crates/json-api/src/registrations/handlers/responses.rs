//! Shared registration response shapes.

use frontdash_app::domain::registrations::records::RegistrationRecord;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A restaurant onboarding submission, as rendered to the admin portal
/// and back to the submitter.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegistrationResponse {
    /// The unique identifier of the registration
    pub uuid: Uuid,

    /// Proposed restaurant name
    pub restaurant_name: String,

    /// Owner first name
    pub owner_first_name: String,

    /// Owner last name
    pub owner_last_name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Cuisine label
    pub cuisine: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// State
    pub state: String,

    /// Zip code
    pub zip_code: String,

    /// Storefront description
    pub description: String,

    /// Daily opening time
    pub opening_time: String,

    /// Daily closing time
    pub closing_time: String,

    /// Uploaded menu document
    pub menu_url: String,

    /// Uploaded logo, when one was provided
    pub logo_url: Option<String>,

    /// Review state: pending, approved, or rejected
    pub status: String,

    /// When the submission arrived
    pub submitted_at: String,

    /// When the verdict was recorded, once decided
    pub decided_at: Option<String>,

    /// Admin who recorded the verdict, once decided
    pub reviewed_by: Option<Uuid>,
}

impl From<RegistrationRecord> for RegistrationResponse {
    fn from(registration: RegistrationRecord) -> Self {
        Self {
            uuid: registration.uuid.into_uuid(),
            restaurant_name: registration.restaurant_name,
            owner_first_name: registration.owner_first_name,
            owner_last_name: registration.owner_last_name,
            email: registration.email,
            phone: registration.phone,
            cuisine: registration.cuisine,
            address: registration.address,
            city: registration.city,
            state: registration.state,
            zip_code: registration.zip_code,
            description: registration.description,
            opening_time: registration.opening_time.to_string(),
            closing_time: registration.closing_time.to_string(),
            menu_url: registration.menu_url,
            logo_url: registration.logo_url,
            status: registration.status.as_str().to_string(),
            submitted_at: registration.submitted_at.to_string(),
            decided_at: registration.decided_at.map(|at| at.to_string()),
            reviewed_by: registration.reviewed_by.map(Into::into),
        }
    }
}
