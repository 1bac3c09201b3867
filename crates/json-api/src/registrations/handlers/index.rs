//! List Registrations Handler
//!
//! The admin review queue, optionally narrowed to one review state.

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use frontdash_app::domain::registrations::records::RegistrationStatus;

use crate::{
    extensions::*,
    registrations::{errors::into_status_error, handlers::RegistrationResponse},
    state::State,
};

/// List Registrations Handler
#[endpoint(
    tags("registrations"),
    summary = "List Registrations",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching registrations"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<RegistrationResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _operator = depot.operator_or_401()?;

    let status = status
        .into_inner()
        .map(|raw| raw.parse::<RegistrationStatus>())
        .transpose()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let registrations = state
        .app
        .registrations
        .list_registrations(status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    ))
}
