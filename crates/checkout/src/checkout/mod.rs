//! Checkout validation and pricing
//!
//! Turns a cart plus the customer's contact, delivery, and payment input
//! into either a fully priced order draft or the complete set of field
//! errors. Validation is all-or-nothing per attempt: every violated rule
//! is reported together, and nothing here renders a view or persists a
//! row. The current time is an explicit parameter, so two calls with the
//! same inputs always produce the same answer.

mod fields;
mod pricing;

pub use fields::{Field, FieldErrors};
pub use pricing::{DELIVERY_FEE, Quote};

use std::{fmt, str::FromStr};

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};

/// Delivery contact and address details. All fields are required at
/// checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient first name.
    pub first_name: String,

    /// Recipient last name.
    pub last_name: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// State.
    pub state: String,

    /// Zip code, exactly five digits once non-digits are stripped.
    pub zip_code: String,

    /// Contact phone, exactly ten digits once non-digits are stripped.
    pub phone: String,
}

/// Card details entered on the card payment path.
///
/// These exist only for validation; drafts and persisted orders carry the
/// [`PaymentKind`] tag and never the card data itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDetails {
    /// 16-digit card number, separators allowed.
    pub card_number: String,

    /// Cardholder name.
    pub name_on_card: String,

    /// Expiry in MM/YY.
    pub expiry_date: String,

    /// 3-digit security code.
    pub cvv: String,
}

/// How the customer pays.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay by card; details are validated here.
    Card(CardDetails),

    /// Redirect-style placeholder flow, no fields to validate.
    Paypal,

    /// Redirect-style placeholder flow, no fields to validate.
    Venmo,
}

impl PaymentMethod {
    /// The tag persisted on an order.
    #[must_use]
    pub const fn kind(&self) -> PaymentKind {
        match self {
            Self::Card(_) => PaymentKind::Card,
            Self::Paypal => PaymentKind::Paypal,
            Self::Venmo => PaymentKind::Venmo,
        }
    }
}

/// Payment method tag as stored on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Card payment.
    Card,

    /// PayPal redirect.
    Paypal,

    /// Venmo redirect.
    Venmo,
}

impl PaymentKind {
    /// Stable storage spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Paypal => "paypal",
            Self::Venmo => "venmo",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown payment method spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown payment method \"{0}\"")]
pub struct ParsePaymentKindError(String);

impl FromStr for PaymentKind {
    type Err = ParsePaymentKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::Paypal),
            "venmo" => Ok(Self::Venmo),
            other => Err(ParsePaymentKindError(other.to_owned())),
        }
    }
}

/// Everything the customer submits on the checkout form.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    /// Contact email for order updates.
    pub email: String,

    /// Delivery details.
    pub shipping: ShippingDetails,

    /// Selected payment method, with card details when applicable.
    pub payment: PaymentMethod,
}

/// The validated, fee-computed representation of a cart immediately
/// before persistence.
#[derive(Debug, Clone)]
pub struct PricedOrderDraft {
    /// Human-facing order number, informational only.
    pub order_number: String,

    /// Restaurant the cart was bound to.
    pub restaurant: Uuid,

    /// Normalized contact email.
    pub email: String,

    /// Normalized delivery details (trimmed, digits-only zip and phone).
    pub shipping: ShippingDetails,

    /// Payment method tag; card data never reaches the draft.
    pub payment: PaymentKind,

    /// The cart lines the quote was computed from.
    pub lines: Vec<CartLine>,

    /// Priced totals.
    pub quote: Quote,
}

/// Why a checkout attempt did not produce a priced draft.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Precondition failure: there is nothing to check out. Callers render
    /// this as its own view, never as a field error.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more fields failed validation. This is data for the caller
    /// to display; every violated rule is represented.
    #[error("checkout form failed validation")]
    Rejected(FieldErrors),
}

/// Validate the form against the cart and price the order.
///
/// Field checks are independent: all failures are collected into one
/// [`FieldErrors`] rather than stopping at the first. On success the
/// returned draft carries the priced [`Quote`], normalized contact and
/// shipping fields, and a freshly allocated order number.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`] when the cart has no lines or no bound
///   restaurant.
/// - [`CheckoutError::Rejected`] when any field rule is violated.
pub fn validate_and_price(
    cart: &Cart,
    form: &CheckoutForm,
    now: &Zoned,
) -> Result<PricedOrderDraft, CheckoutError> {
    let Some(restaurant) = cart.restaurant() else {
        return Err(CheckoutError::EmptyCart);
    };

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut errors = FieldErrors::default();

    errors.record(Field::Email, fields::check_email(&form.email));
    errors.record(
        Field::FirstName,
        fields::check_required(&form.shipping.first_name, "First name is required"),
    );
    errors.record(
        Field::LastName,
        fields::check_required(&form.shipping.last_name, "Last name is required"),
    );
    errors.record(
        Field::Address,
        fields::check_required(&form.shipping.address, "Address is required"),
    );
    errors.record(
        Field::City,
        fields::check_required(&form.shipping.city, "City is required"),
    );
    errors.record(
        Field::State,
        fields::check_required(&form.shipping.state, "State is required"),
    );
    errors.record(Field::ZipCode, fields::check_zip_code(&form.shipping.zip_code));
    errors.record(Field::Phone, fields::check_phone(&form.shipping.phone));

    if let PaymentMethod::Card(card) = &form.payment {
        errors.record(Field::CardNumber, fields::check_card_number(&card.card_number));
        errors.record(
            Field::NameOnCard,
            fields::check_required(&card.name_on_card, "Name on card is required"),
        );
        errors.record(
            Field::ExpiryDate,
            fields::check_expiry_date(&card.expiry_date, now.date()),
        );
        errors.record(Field::Cvv, fields::check_cvv(&card.cvv));
    }

    if !errors.is_empty() {
        return Err(CheckoutError::Rejected(errors));
    }

    Ok(PricedOrderDraft {
        order_number: order_number(now.timestamp()),
        restaurant,
        email: form.email.trim().to_owned(),
        shipping: normalize(&form.shipping),
        payment: form.payment.kind(),
        lines: cart.iter().cloned().collect(),
        quote: Quote::price(cart.subtotal()),
    })
}

/// Allocate a human-facing order number from the order's creation time.
///
/// Purely informational: two orders placed in the same millisecond share
/// a number, and the storage layer's UUID key is the real identity.
#[must_use]
pub fn order_number(created_at: Timestamp) -> String {
    let suffix = created_at.as_millisecond().rem_euclid(1_000_000);

    format!("FD{suffix:06}")
}

fn normalize(shipping: &ShippingDetails) -> ShippingDetails {
    ShippingDetails {
        first_name: shipping.first_name.trim().to_owned(),
        last_name: shipping.last_name.trim().to_owned(),
        address: shipping.address.trim().to_owned(),
        city: shipping.city.trim().to_owned(),
        state: shipping.state.trim().to_owned(),
        zip_code: fields::digits_of(&shipping.zip_code),
        phone: fields::digits_of(&shipping.phone),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn now() -> Zoned {
        // Fixed clock so expiry and order-number assertions are stable.
        "2026-08-05T12:00:00Z[UTC]".parse().unwrap()
    }

    const RESTAURANT: Uuid = Uuid::from_u128(0x1111_2222_3333_4444_5555_6666_7777_8888);

    fn bound_cart() -> Cart {
        let mut cart = Cart::new();

        cart.add_item(CartLine::new(1, "Pad Thai", 10_00), RESTAURANT);
        cart.add_item(CartLine::new(1, "Pad Thai", 10_00), RESTAURANT);

        cart
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            email: "user@example.com".to_owned(),
            shipping: ShippingDetails {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                address: "12 Analytical Way".to_owned(),
                city: "Columbus".to_owned(),
                state: "OH".to_owned(),
                zip_code: "43210".to_owned(),
                phone: "(614) 555-0142".to_owned(),
            },
            payment: PaymentMethod::Card(CardDetails {
                card_number: "4123 5678 9012 3456".to_owned(),
                name_on_card: "Ada Lovelace".to_owned(),
                expiry_date: "12/28".to_owned(),
                cvv: "123".to_owned(),
            }),
        }
    }

    #[test]
    fn empty_cart_is_a_precondition_failure() {
        let result = validate_and_price(&Cart::new(), &valid_form(), &now());

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn valid_card_checkout_produces_a_priced_draft() -> TestResult {
        let cart = bound_cart();

        let draft = validate_and_price(&cart, &valid_form(), &now())?;

        assert_eq!(draft.quote.subtotal, 20_00);
        assert_eq!(draft.quote.total, 26_24);
        assert_eq!(draft.payment, PaymentKind::Card);
        assert_eq!(draft.restaurant, RESTAURANT);
        assert_eq!(draft.lines.len(), 1);
        assert!(draft.order_number.starts_with("FD"));

        Ok(())
    }

    #[test]
    fn shipping_fields_are_normalized_on_success() -> TestResult {
        let mut form = valid_form();

        form.shipping.first_name = "  Ada ".to_owned();
        form.shipping.phone = "(614) 555-0142".to_owned();

        let draft = validate_and_price(&bound_cart(), &form, &now())?;

        assert_eq!(draft.shipping.first_name, "Ada");
        assert_eq!(draft.shipping.phone, "6145550142");
        assert_eq!(draft.shipping.zip_code, "43210");

        Ok(())
    }

    #[test]
    fn all_field_failures_are_collected_at_once() {
        let form = CheckoutForm {
            email: "not-an-email".to_owned(),
            shipping: ShippingDetails {
                zip_code: "1234".to_owned(),
                phone: "555".to_owned(),
                ..ShippingDetails::default()
            },
            payment: PaymentMethod::Card(CardDetails {
                card_number: "1123567890123456".to_owned(),
                expiry_date: "01/20".to_owned(),
                ..CardDetails::default()
            }),
        };

        let Err(CheckoutError::Rejected(errors)) =
            validate_and_price(&bound_cart(), &form, &now())
        else {
            panic!("expected a rejected checkout");
        };

        assert_eq!(errors.len(), 12);
        assert_eq!(
            errors.message_for(Field::ZipCode),
            Some("Zip code must be exactly 5 digits")
        );
        assert_eq!(
            errors.message_for(Field::CardNumber),
            Some("Credit card number must be 16 digits long, start with 4, 2, 5, 3, or 6")
        );
        assert_eq!(
            errors.message_for(Field::ExpiryDate),
            Some("Credit card expiry date must be in the future")
        );
    }

    #[test]
    fn paypal_and_venmo_skip_card_checks() -> TestResult {
        let mut form = valid_form();

        form.payment = PaymentMethod::Paypal;

        let draft = validate_and_price(&bound_cart(), &form, &now())?;

        assert_eq!(draft.payment, PaymentKind::Paypal);

        form.payment = PaymentMethod::Venmo;

        let draft = validate_and_price(&bound_cart(), &form, &now())?;

        assert_eq!(draft.payment, PaymentKind::Venmo);

        Ok(())
    }

    #[test]
    fn validation_is_idempotent() {
        let form = CheckoutForm {
            email: String::new(),
            shipping: ShippingDetails::default(),
            payment: PaymentMethod::Card(CardDetails::default()),
        };
        let cart = bound_cart();

        let first = validate_and_price(&cart, &form, &now());
        let second = validate_and_price(&cart, &form, &now());

        let (Err(CheckoutError::Rejected(first)), Err(CheckoutError::Rejected(second))) =
            (first, second)
        else {
            panic!("expected both attempts to be rejected");
        };

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_pricing_of_the_same_cart_matches() -> TestResult {
        let cart = bound_cart();
        let form = valid_form();

        let first = validate_and_price(&cart, &form, &now())?;
        let second = validate_and_price(&cart, &form, &now())?;

        assert_eq!(first.quote, second.quote);
        assert_eq!(first.order_number, second.order_number);

        Ok(())
    }

    #[test]
    fn order_numbers_derive_from_the_millisecond_clock() -> TestResult {
        let stamp: Timestamp = "2024-01-01T00:00:01.234Z".parse()?;

        // 1704067201234 ms since the epoch; the number keeps the last six.
        assert_eq!(order_number(stamp), "FD201234");

        Ok(())
    }

    #[test]
    fn payment_kind_round_trips_through_storage_spelling() -> TestResult {
        for kind in [PaymentKind::Card, PaymentKind::Paypal, PaymentKind::Venmo] {
            assert_eq!(kind.as_str().parse::<PaymentKind>()?, kind);
        }

        Ok(())
    }
}
