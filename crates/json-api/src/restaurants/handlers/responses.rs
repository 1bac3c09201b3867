//! Shared restaurant response shapes.

use frontdash_app::domain::restaurants::records::RestaurantRecord;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A restaurant as rendered to the browsing storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RestaurantResponse {
    /// The unique identifier of the restaurant
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Cuisine label
    pub cuisine: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// State
    pub state: String,

    /// Zip code
    pub zip_code: String,

    /// Contact phone
    pub phone: String,

    /// Contact email
    pub email: String,

    /// Storefront description
    pub description: String,

    /// Daily opening time
    pub opening_time: String,

    /// Daily closing time
    pub closing_time: String,

    /// Average customer rating
    pub rating: f64,

    /// Quoted delivery window
    pub delivery_estimate: String,

    /// Storefront image, when one was provided
    pub image_url: Option<String>,
}

impl From<RestaurantRecord> for RestaurantResponse {
    fn from(restaurant: RestaurantRecord) -> Self {
        Self {
            uuid: restaurant.uuid.into_uuid(),
            name: restaurant.name,
            cuisine: restaurant.cuisine,
            address: restaurant.address,
            city: restaurant.city,
            state: restaurant.state,
            zip_code: restaurant.zip_code,
            phone: restaurant.phone,
            email: restaurant.email,
            description: restaurant.description,
            opening_time: restaurant.opening_time.to_string(),
            closing_time: restaurant.closing_time.to_string(),
            rating: restaurant.rating,
            delivery_estimate: restaurant.delivery_estimate,
            image_url: restaurant.image_url,
        }
    }
}
