//! Delete Driver Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use frontdash_app::domain::drivers::records::DriverUuid;

use crate::{drivers::errors::into_status_error, extensions::*, state::State};

/// Delete Driver Handler
#[endpoint(
    tags("drivers"),
    summary = "Delete Driver",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Driver removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown driver"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    driver: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .drivers
        .delete_driver(DriverUuid::from_uuid(driver.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use frontdash_app::domain::drivers::{DriversServiceError, MockDriversService};

    use crate::test_helpers::drivers_service;

    use super::*;

    fn make_service(drivers: MockDriversService) -> Service {
        drivers_service(
            drivers,
            Router::with_path("drivers/{driver}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_removes_the_driver() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut drivers = MockDriversService::new();

        drivers
            .expect_delete_driver()
            .once()
            .withf(move |requested| requested.into_uuid() == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/drivers/{uuid}"))
            .send(&make_service(drivers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_driver_returns_404() -> TestResult {
        let mut drivers = MockDriversService::new();

        drivers
            .expect_delete_driver()
            .once()
            .return_once(|_| Err(DriversServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/drivers/{}", Uuid::now_v7()))
            .send(&make_service(drivers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
