//! Create Staff Handler
//!
//! Admin-only: creates an operator account with a generated username.
//! Access tokens for the account are minted separately through the
//! back-office CLI, never over HTTP.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use frontdash_app::domain::staff::{
    data::NewStaff,
    records::{StaffRole, StaffUuid},
};

use crate::{
    extensions::*,
    staff::{errors::into_status_error, handlers::StaffResponse},
    state::State,
};

/// Create Staff Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateStaffRequest {
    /// Full name; the username is generated from the surname
    pub name: String,

    /// Operator role: support, manager, or admin
    pub role: String,
}

/// Create Staff Handler
#[endpoint(
    tags("staff"),
    summary = "Create Staff Member",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown role"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateStaffRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let role = request
        .role
        .parse::<StaffRole>()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let staff = state
        .app
        .staff
        .create_staff(NewStaff {
            uuid: StaffUuid::new(),
            name: request.name,
            role,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(staff.into()))
}
