//! Fee computation
//!
//! All amounts are integer cents; percentage charges go through
//! [`rust_decimal`] so no binary float ever touches money.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

/// Flat delivery fee in cents, independent of payment method.
pub const DELIVERY_FEE: u64 = 2_99;

/// Priced totals for a cart, all in cents.
///
/// A quote is always recomputed from the current cart subtotal and never
/// cached, so it cannot go stale against the lines it was priced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Sum of line totals.
    pub subtotal: u64,

    /// Flat delivery fee.
    pub delivery_fee: u64,

    /// 8.25% of the subtotal, rounded to the nearest cent.
    pub service_charge: u64,

    /// 8% of the subtotal, rounded to the nearest cent.
    pub tax_and_fees: u64,

    /// Sum of the four amounts above.
    pub total: u64,
}

impl Quote {
    /// Price a cart subtotal.
    #[must_use]
    pub fn price(subtotal: u64) -> Self {
        let service_charge = charge(subtotal, Decimal::new(825, 4));
        let tax_and_fees = charge(subtotal, Decimal::new(8, 2));

        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            service_charge,
            tax_and_fees,
            total: subtotal + DELIVERY_FEE + service_charge + tax_and_fees,
        }
    }
}

// Rounds to the nearest cent, away from zero on the midpoint. The rate is
// below 1, so the product always fits back into u64.
fn charge(subtotal: u64, rate: Decimal) -> u64 {
    (Decimal::from(subtotal) * rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

fn usd(cents: u64) -> Money<'static, iso::Currency> {
    Money::from_minor(i64::try_from(cents).unwrap_or(i64::MAX), iso::USD)
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} delivery + {} service + {} tax = {}",
            usd(self.subtotal),
            usd(self.delivery_fee),
            usd(self.service_charge),
            usd(self.tax_and_fees),
            usd(self.total)
        )
    }
}
