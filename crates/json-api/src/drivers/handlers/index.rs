//! List Drivers Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    drivers::{errors::into_status_error, handlers::DriverResponse},
    extensions::*,
    state::State,
};

/// List Drivers Handler
#[endpoint(
    tags("drivers"),
    summary = "List Drivers",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The dispatch roster"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DriverResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let drivers = state
        .app
        .drivers
        .list_drivers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(drivers.into_iter().map(DriverResponse::from).collect()))
}
