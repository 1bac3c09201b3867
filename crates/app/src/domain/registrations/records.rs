//! Registration Records

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Time};
use thiserror::Error;

use crate::{domain::staff::records::StaffUuid, uuids::TypedUuid};

/// Registration UUID
pub type RegistrationUuid = TypedUuid<RegistrationRecord>;

/// A restaurant onboarding submission awaiting an admin decision.
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub uuid: RegistrationUuid,
    pub restaurant_name: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub email: String,
    pub phone: String,
    pub cuisine: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub description: String,
    pub opening_time: Time,
    pub closing_time: Time,
    pub menu_url: String,
    pub logo_url: Option<String>,
    pub status: RegistrationStatus,
    pub submitted_at: Timestamp,
    pub decided_at: Option<Timestamp>,
    pub reviewed_by: Option<StaffUuid>,
}

/// Review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown registration status spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown registration status \"{0}\"")]
pub struct ParseRegistrationStatusError(String);

impl FromStr for RegistrationStatus {
    type Err = ParseRegistrationStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseRegistrationStatusError(other.to_owned())),
        }
    }
}
