//! Registration Data

use jiff::civil::Time;

use crate::domain::registrations::records::RegistrationUuid;

/// New Registration Data
#[derive(Debug, Clone)]
pub struct NewRegistration {
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
}

/// An admin's verdict on a pending registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}
