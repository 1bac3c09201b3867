//! Shared driver response shapes.

use frontdash_app::domain::drivers::records::DriverRecord;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A driver on the dispatch roster.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DriverResponse {
    /// The unique identifier of the driver
    pub uuid: Uuid,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Generated roster handle
    pub username: String,

    /// Roster availability
    pub status: String,

    /// When the driver joined the roster
    pub started_at: String,
}

impl From<DriverRecord> for DriverResponse {
    fn from(driver: DriverRecord) -> Self {
        Self {
            uuid: driver.uuid.into_uuid(),
            first_name: driver.first_name,
            last_name: driver.last_name,
            username: driver.username,
            status: driver.status.as_str().to_string(),
            started_at: driver.started_at.to_string(),
        }
    }
}
