//! Errors

use frontdash_app::domain::restaurants::RestaurantsServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: RestaurantsServiceError) -> StatusError {
    match error {
        RestaurantsServiceError::NotFound => StatusError::not_found(),
        RestaurantsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Restaurant already exists")
        }
        RestaurantsServiceError::InvalidReference
        | RestaurantsServiceError::MissingRequiredData
        | RestaurantsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid restaurant payload")
        }
        RestaurantsServiceError::Sql(source) => {
            error!("restaurant storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
