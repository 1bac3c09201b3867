//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::token::AccessTokenError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The token is unknown, expired, revoked, or fails verification.
    /// Deliberately indistinguishable from the outside.
    #[error("access token not found")]
    NotFound,

    #[error(transparent)]
    Token(#[from] AccessTokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
