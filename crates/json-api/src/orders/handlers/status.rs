//! Advance Status Handler
//!
//! One endpoint serves both portals: the restaurant moves confirmed
//! orders through the kitchen, dispatch moves ready food out the door.
//! The request carries the state the caller last observed, so a
//! concurrent move surfaces as a conflict instead of a silent overwrite.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use frontdash_app::domain::orders::{data::StatusChange, records::OrderUuid};
use frontdash_checkout::status::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Advance Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdvanceStatusRequest {
    /// The status the caller last observed on the order
    pub from: String,

    /// The status to move to
    pub to: String,

    /// Optional revised delivery estimate (RFC 3339)
    pub estimated_delivery: Option<String>,
}

/// Advance Status Handler
#[endpoint(
    tags("orders"),
    summary = "Advance Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status advanced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status spelling"),
        (status_code = StatusCode::CONFLICT, description = "Illegal transition or concurrent update"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown order"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<AdvanceStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _operator = depot.operator_or_401()?;

    let request = json.into_inner();

    let expected = parse_status(&request.from)?;
    let to = parse_status(&request.to)?;

    let estimated_delivery = request
        .estimated_delivery
        .as_deref()
        .map(str::parse::<Timestamp>)
        .transpose()
        .map_err(|error| {
            StatusError::bad_request().brief(format!("Invalid delivery estimate: {error}"))
        })?;

    let order = state
        .app
        .orders
        .advance_status(
            OrderUuid::from_uuid(order.into_inner()),
            StatusChange {
                expected,
                to,
                estimated_delivery,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

fn parse_status(raw: &str) -> Result<OrderStatus, StatusError> {
    raw.parse::<OrderStatus>()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use frontdash_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("orders/{order}/status").post(handler),
        )
    }

    #[tokio::test]
    async fn test_forward_move_reaches_the_service() -> TestResult {
        let restaurant = Uuid::now_v7();

        let mut order = make_order(restaurant);
        order.status = OrderStatus::Ready;

        let uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_advance_status()
            .once()
            .withf(move |requested, change| {
                *requested == uuid
                    && change.expected == OrderStatus::Preparing
                    && change.to == OrderStatus::Ready
                    && change.estimated_delivery.is_none()
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::post(format!("http://example.com/orders/{uuid}/status"))
            .json(&json!({ "from": "preparing", "to": "ready" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "ready");

        Ok(())
    }

    #[tokio::test]
    async fn test_revised_estimate_is_passed_along() -> TestResult {
        let restaurant = Uuid::now_v7();

        let mut order = make_order(restaurant);
        order.status = OrderStatus::OutForDelivery;

        let uuid = order.uuid;
        let estimate: Timestamp = "2026-08-05T19:10:00Z".parse()?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_advance_status()
            .once()
            .withf(move |_, change| change.estimated_delivery == Some(estimate))
            .return_once(move |_, _| Ok(order));

        let res = TestClient::post(format!("http://example.com/orders/{uuid}/status"))
            .json(&json!({
                "from": "ready",
                "to": "out_for_delivery",
                "estimated_delivery": "2026-08-05T19:10:00Z"
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_backward_move_returns_409_with_the_reason() -> TestResult {
        let refused = OrderStatus::Delivered
            .transition(OrderStatus::Preparing)
            .expect_err("backward move must fail");

        let mut orders = MockOrdersService::new();

        orders
            .expect_advance_status()
            .once()
            .return_once(move |_, _| Err(OrdersServiceError::Transition(refused)));

        let mut res = TestClient::post(format!(
            "http://example.com/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "from": "delivered", "to": "preparing" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        let body = res.take_string().await?;

        assert!(
            body.contains("cannot move from delivered to preparing"),
            "got {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_non_canonical_spellings_are_rejected() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_advance_status().never();

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "from": "Queued", "to": "Assigned" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_move_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_advance_status().once().return_once(|_, _| {
            Err(OrdersServiceError::Conflict {
                current: OrderStatus::Ready,
            })
        });

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "from": "confirmed", "to": "preparing" }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
