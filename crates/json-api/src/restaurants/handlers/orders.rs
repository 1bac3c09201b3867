//! Restaurant Orders Handler
//!
//! The restaurant portal's order queue: every order placed with one
//! restaurant, optionally narrowed to a lifecycle stage.

use std::sync::Arc;

use frontdash_checkout::status::OrderStatus;
use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use frontdash_app::domain::{
    orders::data::OrderFilter, restaurants::records::RestaurantUuid,
};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Restaurant Orders Handler
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurant Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders for the restaurant"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _operator = depot.operator_or_401()?;

    let status = status
        .into_inner()
        .map(|raw| raw.parse::<OrderStatus>())
        .transpose()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let filter = OrderFilter {
        status,
        restaurant: Some(RestaurantUuid::from_uuid(restaurant.into_inner())),
    };

    let orders = state
        .app
        .orders
        .list_orders(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
