//! Restaurant Records

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Time};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRecord>;

/// A restaurant visible in the storefront. Rows are created by approving
/// a registration; browsing only ever sees active ones.
#[derive(Debug, Clone)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub opening_time: Time,
    pub closing_time: Time,
    pub rating: f64,
    pub delivery_estimate: String,
    pub image_url: Option<String>,
    pub status: RestaurantStatus,
    pub created_at: Timestamp,
}

/// Listing visibility of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantStatus {
    Active,
    Suspended,
}

impl RestaurantStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown restaurant status spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown restaurant status \"{0}\"")]
pub struct ParseRestaurantStatusError(String);

impl FromStr for RestaurantStatus {
    type Err = ParseRestaurantStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            other => Err(ParseRestaurantStatusError(other.to_owned())),
        }
    }
}
