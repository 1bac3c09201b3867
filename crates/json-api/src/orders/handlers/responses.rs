//! Shared order response shapes.

use frontdash_app::domain::orders::records::{OrderLineRecord, OrderRecord};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full order view, as rendered to tracking, dispatch, and restaurant
/// clients alike. All amounts are cents; the status is the canonical
/// lifecycle spelling.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Human-facing order number
    pub order_number: String,

    /// Canonical lifecycle status
    pub status: String,

    /// Restaurant the order was placed with
    pub restaurant_uuid: Uuid,

    /// Assigned driver, once dispatch has confirmed the order
    pub driver_uuid: Option<Uuid>,

    /// Contact email
    pub email: String,

    /// Recipient first name
    pub first_name: String,

    /// Recipient last name
    pub last_name: String,

    /// Delivery street address
    pub delivery_address: String,

    /// Delivery city
    pub city: String,

    /// Delivery state
    pub state: String,

    /// Delivery zip code
    pub zip_code: String,

    /// Contact phone
    pub phone: String,

    /// Cart subtotal in cents
    pub subtotal: u64,

    /// Flat delivery fee in cents
    pub delivery_fee: u64,

    /// Service charge in cents
    pub service_charge: u64,

    /// Tax and fees in cents
    pub tax: u64,

    /// Grand total in cents
    pub total: u64,

    /// Payment method tag
    pub payment_method: String,

    /// Current delivery estimate
    pub estimated_delivery: String,

    /// Order lines, in checkout order
    pub lines: Vec<OrderLineResponse>,

    /// When the order was placed
    pub created_at: String,

    /// When the order last changed
    pub updated_at: String,
}

/// One priced line of an order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// Menu item identifier
    pub item_id: i64,

    /// Item name at checkout time
    pub name: String,

    /// Unit price in cents at checkout time
    pub unit_price: u64,

    /// Number of units
    pub quantity: u32,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            order_number: order.order_number,
            status: order.status.as_str().to_string(),
            restaurant_uuid: order.restaurant_uuid.into_uuid(),
            driver_uuid: order.driver_uuid.map(Into::into),
            email: order.email,
            first_name: order.first_name,
            last_name: order.last_name,
            delivery_address: order.delivery_address,
            city: order.city,
            state: order.state,
            zip_code: order.zip_code,
            phone: order.phone,
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            service_charge: order.service_charge,
            tax: order.tax,
            total: order.total,
            payment_method: order.payment_method.as_str().to_string(),
            estimated_delivery: order.estimated_delivery.to_string(),
            lines: order.lines.into_iter().map(OrderLineResponse::from).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name,
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}
