//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use frontdash_app::{
    auth::{MockAuthService, Operator},
    context::AppContext,
    domain::{
        drivers::{
            MockDriversService,
            records::{DriverRecord, DriverStatus, DriverUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
        },
        registrations::{
            MockRegistrationsService,
            records::{RegistrationRecord, RegistrationStatus, RegistrationUuid},
        },
        restaurants::{
            MockRestaurantsService,
            records::{RestaurantRecord, RestaurantStatus, RestaurantUuid},
        },
        staff::{
            MockStaffService,
            records::{StaffRecord, StaffRole, StaffUuid},
        },
    },
};
use frontdash_checkout::{checkout::PaymentKind, status::OrderStatus};
use jiff::{Timestamp, civil::Time};

use crate::{extensions::*, state::State};

pub(crate) const TEST_STAFF_UUID: StaffUuid = StaffUuid::from_uuid(Uuid::nil());

/// Stands in for the auth middleware: every request is handled as the
/// same admin operator.
#[salvo::handler]
pub(crate) async fn inject_operator(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_operator(Operator {
        staff_uuid: TEST_STAFF_UUID,
        role: StaffRole::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

/// The full mocked service set behind a [`State`]. Defaults are strict:
/// any call on a service the test did not replace fails the test.
pub(crate) struct TestServices {
    pub(crate) orders: MockOrdersService,
    pub(crate) restaurants: MockRestaurantsService,
    pub(crate) registrations: MockRegistrationsService,
    pub(crate) drivers: MockDriversService,
    pub(crate) staff: MockStaffService,
    pub(crate) auth: MockAuthService,
}

impl Default for TestServices {
    fn default() -> Self {
        let mut orders = MockOrdersService::new();

        orders.expect_place_order().never();
        orders.expect_get_order().never();
        orders.expect_list_orders().never();
        orders.expect_advance_status().never();
        orders.expect_assign_driver().never();

        let mut restaurants = MockRestaurantsService::new();

        restaurants.expect_list_active().never();
        restaurants.expect_get_restaurant().never();

        let mut registrations = MockRegistrationsService::new();

        registrations.expect_submit().never();
        registrations.expect_list_registrations().never();
        registrations.expect_decide().never();

        let mut drivers = MockDriversService::new();

        drivers.expect_create_driver().never();
        drivers.expect_list_drivers().never();
        drivers.expect_delete_driver().never();

        let mut staff = MockStaffService::new();

        staff.expect_create_staff().never();
        staff.expect_list_staff().never();
        staff.expect_delete_staff().never();

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        Self {
            orders,
            restaurants,
            registrations,
            drivers,
            staff,
            auth,
        }
    }
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        Arc::new(State::new(AppContext {
            orders: Arc::new(self.orders),
            restaurants: Arc::new(self.restaurants),
            registrations: Arc::new(self.registrations),
            drivers: Arc::new(self.drivers),
            staff: Arc::new(self.staff),
            auth: Arc::new(self.auth),
        }))
    }

    fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_operator)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    TestServices {
        auth,
        ..TestServices::default()
    }
    .into_state()
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    TestServices {
        orders,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn restaurants_service(restaurants: MockRestaurantsService, route: Router) -> Service {
    TestServices {
        restaurants,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn registrations_service(
    registrations: MockRegistrationsService,
    route: Router,
) -> Service {
    TestServices {
        registrations,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn drivers_service(drivers: MockDriversService, route: Router) -> Service {
    TestServices {
        drivers,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn staff_service(staff: MockStaffService, route: Router) -> Service {
    TestServices {
        staff,
        ..TestServices::default()
    }
    .into_service(route)
}

pub(crate) fn make_order(restaurant: Uuid) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::new(),
        order_number: "FD201234".to_owned(),
        restaurant_uuid: RestaurantUuid::from_uuid(restaurant),
        driver_uuid: None,
        status: OrderStatus::Pending,
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        delivery_address: "12 Analytical Way".to_owned(),
        city: "Columbus".to_owned(),
        state: "OH".to_owned(),
        zip_code: "43210".to_owned(),
        phone: "6145550142".to_owned(),
        subtotal: 20_00,
        delivery_fee: 2_99,
        service_charge: 1_65,
        tax: 1_60,
        total: 26_24,
        payment_method: PaymentKind::Card,
        estimated_delivery: Timestamp::UNIX_EPOCH,
        lines: vec![OrderLineRecord {
            uuid: OrderLineUuid::new(),
            item_id: 1,
            name: "Pad Thai".to_owned(),
            unit_price: 10_00,
            quantity: 2,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_restaurant() -> RestaurantRecord {
    RestaurantRecord {
        uuid: RestaurantUuid::new(),
        name: "Thai Terrace".to_owned(),
        cuisine: "Thai".to_owned(),
        address: "88 Market Street".to_owned(),
        city: "Columbus".to_owned(),
        state: "OH".to_owned(),
        zip_code: "43215".to_owned(),
        phone: "6145550188".to_owned(),
        email: "hello@thaiterrace.example".to_owned(),
        description: "Family-run kitchen".to_owned(),
        opening_time: Time::constant(11, 0, 0, 0),
        closing_time: Time::constant(22, 0, 0, 0),
        rating: 4.6,
        delivery_estimate: "30-40 min".to_owned(),
        image_url: None,
        status: RestaurantStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_registration() -> RegistrationRecord {
    RegistrationRecord {
        uuid: RegistrationUuid::new(),
        restaurant_name: "Thai Terrace".to_owned(),
        owner_first_name: "Mali".to_owned(),
        owner_last_name: "Srisai".to_owned(),
        email: "mali@thaiterrace.example".to_owned(),
        phone: "6145550188".to_owned(),
        cuisine: "Thai".to_owned(),
        address: "88 Market Street".to_owned(),
        city: "Columbus".to_owned(),
        state: "OH".to_owned(),
        zip_code: "43215".to_owned(),
        description: "Family-run kitchen".to_owned(),
        opening_time: Time::constant(11, 0, 0, 0),
        closing_time: Time::constant(22, 0, 0, 0),
        menu_url: "https://cdn.example/menus/thai-terrace.pdf".to_owned(),
        logo_url: None,
        status: RegistrationStatus::Pending,
        submitted_at: Timestamp::UNIX_EPOCH,
        decided_at: None,
        reviewed_by: None,
    }
}

pub(crate) fn make_driver() -> DriverRecord {
    DriverRecord {
        uuid: DriverUuid::new(),
        first_name: "Rosa".to_owned(),
        last_name: "Garcia".to_owned(),
        username: "@garcia42".to_owned(),
        status: DriverStatus::Active,
        started_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_staff() -> StaffRecord {
    StaffRecord {
        uuid: StaffUuid::new(),
        name: "Dana Whitcombe".to_owned(),
        username: "whitcombe17".to_owned(),
        role: StaffRole::Support,
        added_at: Timestamp::UNIX_EPOCH,
    }
}
