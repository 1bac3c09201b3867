//! Driver Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Driver UUID
pub type DriverUuid = TypedUuid<DriverRecord>;

/// A delivery driver on the dispatch roster.
#[derive(Debug, Clone)]
pub struct DriverRecord {
    pub uuid: DriverUuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub status: DriverStatus,
    pub started_at: Timestamp,
}

/// Roster availability of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl DriverStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown driver status spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown driver status \"{0}\"")]
pub struct ParseDriverStatusError(String);

impl FromStr for DriverStatus {
    type Err = ParseDriverStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseDriverStatusError(other.to_owned())),
        }
    }
}
