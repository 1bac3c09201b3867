//! Staff Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Staff UUID
pub type StaffUuid = TypedUuid<StaffRecord>;

/// A back-office operator account.
#[derive(Debug, Clone)]
pub struct StaffRecord {
    pub uuid: StaffUuid,
    pub name: String,
    pub username: String,
    pub role: StaffRole,
    pub added_at: Timestamp,
}

/// What an operator is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    /// Dispatch and customer support.
    Support,

    /// Restaurant-facing operations.
    Manager,

    /// Full back-office access.
    Admin,
}

impl StaffRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown staff role spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown staff role \"{0}\"")]
pub struct ParseStaffRoleError(String);

impl FromStr for StaffRole {
    type Err = ParseStaffRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "support" => Ok(Self::Support),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(ParseStaffRoleError(other.to_owned())),
        }
    }
}
