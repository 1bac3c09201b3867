//! Orders service errors.

use std::num::TryFromIntError;

use frontdash_checkout::status::{OrderStatus, TransitionError};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    /// The lifecycle refused the move. Nothing was written.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The order's state no longer matches what the caller observed.
    #[error("order is now {current}, not the expected state")]
    Conflict { current: OrderStatus },

    #[error("invalid monetary amount")]
    InvalidAmount(#[from] TryFromIntError),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let mapped = OrdersServiceError::from(Error::RowNotFound);

        assert!(matches!(mapped, OrdersServiceError::NotFound));
    }

    #[test]
    fn transition_errors_keep_their_reason() {
        let refused = OrderStatus::Delivered
            .transition(OrderStatus::Preparing)
            .expect_err("backward move must fail");

        let mapped = OrdersServiceError::from(refused);

        assert_eq!(
            mapped.to_string(),
            "cannot move from delivered to preparing"
        );
    }
}
