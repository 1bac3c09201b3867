//! Submit Registration Handler
//!
//! Public onboarding endpoint: a restaurant owner submits their details
//! and the submission lands in the pending queue for an admin verdict.
//! Menu and logo are URLs the owner already uploaded elsewhere; nothing
//! is stored here beyond the reference.

use std::sync::Arc;

use jiff::civil::Time;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use frontdash_app::domain::registrations::{
    data::NewRegistration, records::RegistrationUuid,
};

use crate::{
    extensions::*,
    registrations::{errors::into_status_error, handlers::RegistrationResponse},
    state::State,
};

/// Submit Registration Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitRegistrationRequest {
    /// Proposed restaurant name
    pub restaurant_name: String,

    /// Owner first name
    pub owner_first_name: String,

    /// Owner last name
    pub owner_last_name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

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

    /// Storefront description
    pub description: String,

    /// Daily opening time (HH:MM)
    pub opening_time: String,

    /// Daily closing time (HH:MM)
    pub closing_time: String,

    /// Uploaded menu document URL
    pub menu_url: String,

    /// Uploaded logo URL, optional
    pub logo_url: Option<String>,
}

/// Submit Registration Handler
#[endpoint(
    tags("registrations"),
    summary = "Submit Registration",
    responses(
        (status_code = StatusCode::CREATED, description = "Registration submitted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubmitRegistrationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegistrationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let opening_time = parse_time(&request.opening_time, "Opening time")?;
    let closing_time = parse_time(&request.closing_time, "Closing time")?;

    let registration = state
        .app
        .registrations
        .submit(NewRegistration {
            uuid: RegistrationUuid::new(),
            restaurant_name: request.restaurant_name,
            owner_first_name: request.owner_first_name,
            owner_last_name: request.owner_last_name,
            email: request.email,
            phone: request.phone,
            cuisine: request.cuisine,
            address: request.address,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            description: request.description,
            opening_time,
            closing_time,
            menu_url: request.menu_url,
            logo_url: request.logo_url,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(registration.into()))
}

fn parse_time(raw: &str, label: &str) -> Result<Time, StatusError> {
    raw.parse::<Time>().map_err(|_parse_error| {
        StatusError::bad_request().brief(format!("{label} must be a valid HH:MM time"))
    })
}
