//! Restaurant Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod orders;

mod responses;

pub(crate) use responses::RestaurantResponse;
