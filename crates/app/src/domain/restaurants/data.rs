//! Restaurant Data

use jiff::civil::Time;

use crate::domain::restaurants::records::RestaurantUuid;

/// New Restaurant Data
///
/// Built from an approved registration; never constructed from raw
/// storefront input.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
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
    pub image_url: Option<String>,
}
