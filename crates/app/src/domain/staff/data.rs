//! Staff Data

use crate::domain::staff::records::{StaffRole, StaffUuid};

/// New Staff Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub uuid: StaffUuid,
    pub name: String,
    pub role: StaffRole,
}
