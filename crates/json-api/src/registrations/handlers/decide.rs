//! Decide Registration Handler
//!
//! Records an admin verdict on a pending submission. Approval opens the
//! restaurant in the storefront as part of the same decision; decisions
//! are final, and a second verdict comes back as a conflict.

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use frontdash_app::domain::registrations::{data::Decision, records::RegistrationUuid};

use crate::{
    extensions::*,
    registrations::{errors::into_status_error, handlers::RegistrationResponse},
    state::State,
};

/// Decide Registration Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DecideRegistrationRequest {
    /// The verdict: "approved" or "rejected"
    pub decision: String,
}

/// Decide Registration Handler
#[endpoint(
    tags("registrations"),
    summary = "Decide Registration",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Verdict recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown verdict"),
        (status_code = StatusCode::CONFLICT, description = "Already decided"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown registration"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    registration: PathParam<Uuid>,
    json: JsonBody<DecideRegistrationRequest>,
    depot: &mut Depot,
) -> Result<Json<RegistrationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let operator = depot.operator_or_401()?;

    let decision = match json.into_inner().decision.as_str() {
        "approved" => Decision::Approved,
        "rejected" => Decision::Rejected,
        other => {
            return Err(
                StatusError::bad_request().brief(format!("unknown decision \"{other}\""))
            );
        }
    };

    let registration = state
        .app
        .registrations
        .decide(
            RegistrationUuid::from_uuid(registration.into_inner()),
            decision,
            operator.staff_uuid,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(registration.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use frontdash_app::domain::registrations::{
        MockRegistrationsService, RegistrationsServiceError, records::RegistrationStatus,
    };

    use crate::test_helpers::{TEST_STAFF_UUID, make_registration, registrations_service};

    use super::*;

    fn make_service(registrations: MockRegistrationsService) -> Service {
        registrations_service(
            registrations,
            Router::with_path("registrations/{registration}/decision").post(handler),
        )
    }

    #[tokio::test]
    async fn test_approval_records_the_reviewing_operator() -> TestResult {
        let mut approved = make_registration();
        approved.status = RegistrationStatus::Approved;
        approved.decided_at = Some(Timestamp::UNIX_EPOCH);
        approved.reviewed_by = Some(TEST_STAFF_UUID);

        let uuid = approved.uuid;

        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_decide()
            .once()
            .withf(move |requested, decision, reviewer| {
                *requested == uuid
                    && *decision == Decision::Approved
                    && *reviewer == TEST_STAFF_UUID
            })
            .return_once(move |_, _, _| Ok(approved));

        let mut res = TestClient::post(format!(
            "http://example.com/registrations/{uuid}/decision"
        ))
        .json(&json!({ "decision": "approved" }))
        .send(&make_service(registrations))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: RegistrationResponse = res.take_json().await?;

        assert_eq!(body.status, "approved");
        assert_eq!(body.reviewed_by, Some(TEST_STAFF_UUID.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_second_verdict_returns_409() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_decide()
            .once()
            .return_once(|_, _, _| Err(RegistrationsServiceError::AlreadyDecided));

        let res = TestClient::post(format!(
            "http://example.com/registrations/{}/decision",
            Uuid::now_v7()
        ))
        .json(&json!({ "decision": "rejected" }))
        .send(&make_service(registrations))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_verdicts_are_rejected() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations.expect_decide().never();

        let res = TestClient::post(format!(
            "http://example.com/registrations/{}/decision",
            Uuid::now_v7()
        ))
        .json(&json!({ "decision": "maybe" }))
        .send(&make_service(registrations))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
