//! Errors

use frontdash_app::domain::drivers::DriversServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: DriversServiceError) -> StatusError {
    match error {
        DriversServiceError::NotFound => StatusError::not_found(),
        DriversServiceError::AlreadyExists => {
            StatusError::conflict().brief("Driver already exists")
        }
        DriversServiceError::MissingRequiredData | DriversServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid driver payload")
        }
        DriversServiceError::Sql(source) => {
            error!("driver storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
