//! Place Order Handler
//!
//! The checkout endpoint: folds the submitted cart lines through the
//! aggregator, runs the all-or-nothing validation and pricing pass, and
//! only then hands a priced draft to storage. An empty cart is its own
//! failure surface; field violations come back as one complete map.

use std::{collections::BTreeMap, sync::Arc};

use jiff::Zoned;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use frontdash_app::domain::orders::{data::NewOrder, records::OrderUuid};
use frontdash_checkout::{
    cart::{Cart, CartLine},
    checkout::{
        CardDetails, CheckoutError, CheckoutForm, FieldErrors, PaymentMethod, ShippingDetails,
        validate_and_price,
    },
};

use crate::{orders::errors::into_status_error, extensions::*, state::State};

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlaceOrderRequest {
    /// Restaurant the cart belongs to
    pub restaurant_uuid: Uuid,

    /// Cart lines; quantities merge by item id
    pub lines: Vec<OrderLineRequest>,

    /// Contact email
    pub email: String,

    /// Delivery details
    pub shipping: ShippingRequest,

    /// Payment selection
    pub payment: PaymentRequest,
}

/// One submitted cart line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineRequest {
    /// Menu item identifier
    pub item_id: i64,

    /// Item name as shown on the menu
    pub name: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Number of units, at least 1
    pub quantity: u32,
}

/// Submitted delivery details.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
}

impl From<ShippingRequest> for ShippingDetails {
    fn from(request: ShippingRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            phone: request.phone,
        }
    }
}

/// Submitted payment selection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "method", rename_all = "snake_case")]
pub(crate) enum PaymentRequest {
    /// Card payment with its details
    Card {
        /// 16-digit card number, separators allowed
        card_number: String,

        /// Cardholder name
        name_on_card: String,

        /// Expiry in MM/YY
        expiry_date: String,

        /// 3-digit security code
        cvv: String,
    },

    /// PayPal redirect flow
    Paypal,

    /// Venmo redirect flow
    Venmo,
}

impl From<PaymentRequest> for PaymentMethod {
    fn from(request: PaymentRequest) -> Self {
        match request {
            PaymentRequest::Card {
                card_number,
                name_on_card,
                expiry_date,
                cvv,
            } => Self::Card(CardDetails {
                card_number,
                name_on_card,
                expiry_date,
                cvv,
            }),
            PaymentRequest::Paypal => Self::Paypal,
            PaymentRequest::Venmo => Self::Venmo,
        }
    }
}

/// Order Placed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderPlacedResponse {
    /// Created order UUID
    pub uuid: Uuid,

    /// Human-facing order number
    pub order_number: String,

    /// Initial lifecycle status, always "pending"
    pub status: String,

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

    /// Estimated delivery time
    pub estimated_delivery: String,
}

/// Checkout Rejected Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRejectedResponse {
    /// Field name to human-readable message; every violated rule present
    pub errors: BTreeMap<String, String>,
}

impl From<FieldErrors> for CheckoutRejectedResponse {
    fn from(errors: FieldErrors) -> Self {
        Self {
            errors: errors
                .iter()
                .map(|(field, message)| (field.name().to_string(), message.to_string()))
                .collect(),
        }
    }
}

/// Place Order Handler
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or malformed payload"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Field validation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let cart = build_cart(&request)?;

    let form = CheckoutForm {
        email: request.email,
        shipping: request.shipping.into(),
        payment: PaymentMethod::from(request.payment),
    };

    let now = Zoned::now();

    let draft = match validate_and_price(&cart, &form, &now) {
        Ok(draft) => draft,
        Err(CheckoutError::EmptyCart) => {
            return Err(StatusError::bad_request().brief("Cart is empty"));
        }
        Err(CheckoutError::Rejected(errors)) => {
            res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
            res.render(Json(CheckoutRejectedResponse::from(errors)));

            return Ok(());
        }
    };

    let order = state
        .app
        .orders
        .place_order(NewOrder {
            uuid: OrderUuid::new(),
            draft,
            placed_at: now.timestamp(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    res.render(Json(OrderPlacedResponse {
        uuid: order.uuid.into_uuid(),
        order_number: order.order_number,
        status: order.status.as_str().to_string(),
        subtotal: order.subtotal,
        delivery_fee: order.delivery_fee,
        service_charge: order.service_charge,
        tax: order.tax,
        total: order.total,
        estimated_delivery: order.estimated_delivery.to_string(),
    }));

    Ok(())
}

fn build_cart(request: &PlaceOrderRequest) -> Result<Cart, StatusError> {
    let mut cart = Cart::new();

    for line in &request.lines {
        if line.quantity == 0 {
            return Err(StatusError::bad_request().brief("Line quantity must be at least 1"));
        }

        cart.add_item(
            CartLine {
                item_id: line.item_id,
                name: line.name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
            },
            request.restaurant_uuid,
        );
    }

    Ok(cart)
}
