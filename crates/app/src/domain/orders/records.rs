//! Order Records

use frontdash_checkout::{checkout::PaymentKind, status::OrderStatus};
use jiff::Timestamp;

use crate::{
    domain::{drivers::records::DriverUuid, restaurants::records::RestaurantUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// A persisted order. Created once at checkout confirmation and mutated
/// only through status transitions; never deleted in the normal flow.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub restaurant_uuid: RestaurantUuid,
    pub driver_uuid: Option<DriverUuid>,
    pub status: OrderStatus,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub delivery_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub service_charge: u64,
    pub tax: u64,
    pub total: u64,
    pub payment_method: PaymentKind,
    pub estimated_delivery: Timestamp,
    pub lines: Vec<OrderLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// One priced line of a persisted order, frozen at checkout time.
#[derive(Debug, Clone)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub item_id: i64,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}
