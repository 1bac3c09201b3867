//! Shared staff response shapes.

use frontdash_app::domain::staff::records::StaffRecord;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A back-office operator account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StaffResponse {
    /// The unique identifier of the account
    pub uuid: Uuid,

    /// Full name
    pub name: String,

    /// Generated login username
    pub username: String,

    /// Operator role: support, manager, or admin
    pub role: String,

    /// When the account was created
    pub added_at: String,
}

impl From<StaffRecord> for StaffResponse {
    fn from(staff: StaffRecord) -> Self {
        Self {
            uuid: staff.uuid.into_uuid(),
            name: staff.name,
            username: staff.username,
            role: staff.role.as_str().to_string(),
            added_at: staff.added_at.to_string(),
        }
    }
}
