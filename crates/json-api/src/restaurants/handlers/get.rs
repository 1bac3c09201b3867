//! Get Restaurant Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use frontdash_app::domain::restaurants::records::RestaurantUuid;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// Get Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant",
    responses(
        (status_code = StatusCode::OK, description = "Restaurant found"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown restaurant"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RestaurantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurant = state
        .app
        .restaurants
        .get_restaurant(RestaurantUuid::from_uuid(restaurant.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(restaurant.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use frontdash_app::domain::restaurants::{
        MockRestaurantsService, RestaurantsServiceError,
    };

    use crate::test_helpers::{make_restaurant, restaurants_service};

    use super::*;

    fn make_service(restaurants: MockRestaurantsService) -> Service {
        restaurants_service(
            restaurants,
            Router::with_path("restaurants/{restaurant}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_the_restaurant() -> TestResult {
        let restaurant = make_restaurant();
        let uuid = restaurant.uuid;

        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_get_restaurant()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(restaurant));

        let mut res = TestClient::get(format!("http://example.com/restaurants/{uuid}"))
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: RestaurantResponse = res.take_json().await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.cuisine, "Thai");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_restaurant_returns_404() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_get_restaurant()
            .once()
            .return_once(|_| Err(RestaurantsServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/restaurants/{}",
            Uuid::now_v7()
        ))
        .send(&make_service(restaurants))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
