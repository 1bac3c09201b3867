//! Delete Staff Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use frontdash_app::domain::staff::records::StaffUuid;

use crate::{extensions::*, staff::errors::into_status_error, state::State};

/// Delete Staff Handler
#[endpoint(
    tags("staff"),
    summary = "Delete Staff Member",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Account removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown account"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    staff: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .staff
        .delete_staff(StaffUuid::from_uuid(staff.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
