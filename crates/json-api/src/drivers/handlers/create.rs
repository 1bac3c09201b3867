//! Create Driver Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use frontdash_app::domain::drivers::{data::NewDriver, records::DriverUuid};

use crate::{
    drivers::{errors::into_status_error, handlers::DriverResponse},
    extensions::*,
    state::State,
};

/// Create Driver Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateDriverRequest {
    /// First name
    pub first_name: String,

    /// Last name; the roster handle is generated from it
    pub last_name: String,
}

/// Create Driver Handler
#[endpoint(
    tags("drivers"),
    summary = "Create Driver",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Driver added to the roster"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid driver payload"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDriverRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DriverResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let driver = state
        .app
        .drivers
        .create_driver(NewDriver {
            uuid: DriverUuid::new(),
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(driver.into()))
}
