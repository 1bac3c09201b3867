//! List Restaurants Handler
//!
//! The browse surface: only restaurants visible in the storefront are
//! ever returned.

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    restaurants::{errors::into_status_error, handlers::RestaurantResponse},
    state::State,
};

/// List Restaurants Handler
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurants",
    responses(
        (status_code = StatusCode::OK, description = "Active restaurants"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<RestaurantResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let restaurants = state
        .app
        .restaurants
        .list_active()
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        restaurants.into_iter().map(RestaurantResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use frontdash_app::domain::restaurants::MockRestaurantsService;

    use crate::test_helpers::{make_restaurant, restaurants_service};

    use super::*;

    fn make_service(restaurants: MockRestaurantsService) -> Service {
        restaurants_service(restaurants, Router::with_path("restaurants").get(handler))
    }

    #[tokio::test]
    async fn test_browse_lists_active_restaurants() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_list_active()
            .once()
            .return_once(|| Ok(vec![make_restaurant()]));

        let mut res = TestClient::get("http://example.com/restaurants")
            .send(&make_service(restaurants))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<RestaurantResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1);
        assert_eq!(body.first().map(|r| r.name.as_str()), Some("Thai Terrace"));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_storefront_is_an_empty_list() -> TestResult {
        let mut restaurants = MockRestaurantsService::new();

        restaurants
            .expect_list_active()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/restaurants")
            .send(&make_service(restaurants))
            .await;

        let body: Vec<RestaurantResponse> = res.take_json().await?;

        assert!(body.is_empty());

        Ok(())
    }
}
