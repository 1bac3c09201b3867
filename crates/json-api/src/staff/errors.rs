//! Errors

use frontdash_app::domain::staff::StaffServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: StaffServiceError) -> StatusError {
    match error {
        StaffServiceError::NotFound => StatusError::not_found(),
        StaffServiceError::AlreadyExists => {
            StatusError::conflict().brief("Staff member already exists")
        }
        StaffServiceError::MissingRequiredData | StaffServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid staff payload")
        }
        StaffServiceError::Sql(source) => {
            error!("staff storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
