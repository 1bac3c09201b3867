//! Assign Driver Handler
//!
//! Dispatch confirms a pending order by putting a driver on it. The
//! update only lands while the order is still pending; anything else
//! comes back as a conflict.

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

use frontdash_app::domain::{drivers::records::DriverUuid, orders::records::OrderUuid};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Assign Driver Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AssignDriverRequest {
    /// Driver to put on the order
    pub driver_uuid: Uuid,
}

/// Assign Driver Handler
#[endpoint(
    tags("orders"),
    summary = "Assign Driver",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Driver assigned, order confirmed"),
        (status_code = StatusCode::CONFLICT, description = "Order is no longer pending"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown order"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<AssignDriverRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let _operator = depot.operator_or_401()?;

    let order = state
        .app
        .orders
        .assign_driver(
            OrderUuid::from_uuid(order.into_inner()),
            DriverUuid::from_uuid(json.into_inner().driver_uuid),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use frontdash_app::domain::orders::{MockOrdersService, OrdersServiceError};
    use frontdash_checkout::status::OrderStatus;

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("orders/{order}/assign").post(handler),
        )
    }

    #[tokio::test]
    async fn test_assignment_confirms_the_order() -> TestResult {
        let restaurant = Uuid::now_v7();
        let driver = Uuid::now_v7();

        let mut order = make_order(restaurant);
        order.status = OrderStatus::Confirmed;
        order.driver_uuid = Some(DriverUuid::from_uuid(driver));

        let uuid = order.uuid;

        let mut orders = MockOrdersService::new();

        orders
            .expect_assign_driver()
            .once()
            .withf(move |requested, assigned| {
                *requested == uuid && assigned.into_uuid() == driver
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::post(format!("http://example.com/orders/{uuid}/assign"))
            .json(&json!({ "driver_uuid": driver }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "confirmed");
        assert_eq!(body.driver_uuid, Some(driver));

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_assignment_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_assign_driver().once().return_once(|_, _| {
            Err(OrdersServiceError::Conflict {
                current: OrderStatus::Cancelled,
            })
        });

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/assign",
            Uuid::now_v7()
        ))
        .json(&json!({ "driver_uuid": Uuid::now_v7() }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_assign_driver()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::post(format!(
            "http://example.com/orders/{}/assign",
            Uuid::now_v7()
        ))
        .json(&json!({ "driver_uuid": Uuid::now_v7() }))
        .send(&make_service(orders))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
