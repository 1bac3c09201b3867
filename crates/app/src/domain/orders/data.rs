//! Order Data

use frontdash_checkout::{checkout::PricedOrderDraft, status::OrderStatus};
use jiff::Timestamp;

use crate::domain::{orders::records::OrderUuid, restaurants::records::RestaurantUuid};

/// New Order Data
///
/// Wraps a validated, priced draft together with the identity and clock
/// the storage layer should use for it.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub draft: PricedOrderDraft,
    pub placed_at: Timestamp,
}

/// Filters for listing orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub restaurant: Option<RestaurantUuid>,
}

/// A requested status move, carrying the state the caller last observed
/// so concurrent updates are detected instead of overwritten.
#[derive(Debug, Clone, Copy)]
pub struct StatusChange {
    /// The state the caller believes the order is in.
    pub expected: OrderStatus,

    /// The state to move to.
    pub to: OrderStatus,

    /// Optional revised delivery estimate carried by the transition.
    pub estimated_delivery: Option<Timestamp>,
}
