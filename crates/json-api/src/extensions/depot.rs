//! Depot helper extensions.

use std::any::Any;

use frontdash_app::auth::Operator;
use salvo::prelude::{Depot, StatusError};

const OPERATOR_KEY: &str = "frontdash.operator";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Access to the authenticated operator the auth middleware resolved.
pub(crate) trait OperatorDepotExt {
    fn insert_operator(&mut self, operator: Operator);

    fn operator_or_401(&self) -> Result<Operator, StatusError>;
}

impl OperatorDepotExt for Depot {
    fn insert_operator(&mut self, operator: Operator) {
        self.insert(OPERATOR_KEY, operator);
    }

    fn operator_or_401(&self) -> Result<Operator, StatusError> {
        self.get::<Operator>(OPERATOR_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
