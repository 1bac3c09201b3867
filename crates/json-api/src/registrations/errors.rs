//! Errors

use frontdash_app::domain::registrations::RegistrationsServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: RegistrationsServiceError) -> StatusError {
    match error {
        RegistrationsServiceError::NotFound => StatusError::not_found(),
        RegistrationsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Registration already exists")
        }
        RegistrationsServiceError::AlreadyDecided => {
            StatusError::conflict().brief("Registration has already been decided")
        }
        RegistrationsServiceError::InvalidReference
        | RegistrationsServiceError::MissingRequiredData
        | RegistrationsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid registration payload")
        }
        RegistrationsServiceError::Sql(source) => {
            error!("registration storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
