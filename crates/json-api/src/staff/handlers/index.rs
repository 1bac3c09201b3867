//! List Staff Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    staff::{errors::into_status_error, handlers::StaffResponse},
    state::State,
};

/// List Staff Handler
#[endpoint(
    tags("staff"),
    summary = "List Staff Members",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All operator accounts"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<StaffResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let staff = state
        .app
        .staff
        .list_staff()
        .await
        .map_err(into_status_error)?;

    Ok(Json(staff.into_iter().map(StaffResponse::from).collect()))
}
