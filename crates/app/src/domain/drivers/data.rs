//! Driver Data

use crate::domain::drivers::records::DriverUuid;

/// New Driver Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub uuid: DriverUuid,
    pub first_name: String,
    pub last_name: String,
}
