//! Cart aggregation
//!
//! A cart collects the items a customer has picked from a single
//! restaurant. All quantity and total queries are answered from in-memory
//! state; the chosen delivery address is cached elsewhere and is not part
//! of this type's contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One aggregated line in a cart.
///
/// Lines are unique by `item_id` within a cart; re-adding the same item
/// merges quantities rather than appending a duplicate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Menu item identifier within the bound restaurant.
    pub item_id: i64,

    /// Display name, as shown on the menu at the time of adding.
    pub name: String,

    /// Unit price in cents.
    pub unit_price: u64,

    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with quantity 1.
    #[must_use]
    pub fn new(item_id: i64, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            item_id,
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Price of the whole line in cents.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// The single active cart for a session, bound to at most one restaurant.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    restaurant: Option<Uuid>,
}

impl Cart {
    /// Create an empty cart with no restaurant binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the cart and bind it to `restaurant`.
    ///
    /// Quantities merge by `item_id`. If the cart is already bound to a
    /// *different* restaurant the call is a no-op: callers switching
    /// restaurants must [`clear`] the cart first, so nothing is ever
    /// silently discarded here.
    ///
    /// [`clear`]: Cart::clear
    pub fn add_item(&mut self, line: CartLine, restaurant: Uuid) {
        if self.restaurant.is_some_and(|bound| bound != restaurant) {
            return;
        }

        self.restaurant = Some(restaurant);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|existing| existing.item_id == line.item_id)
        {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Decrement the quantity of `item_id` by one, dropping the line when
    /// it reaches zero. Removing an absent item is a no-op. When the last
    /// line goes, the restaurant binding goes with it.
    pub fn remove_item(&mut self, item_id: i64) {
        let Some(index) = self.lines.iter().position(|line| line.item_id == item_id) else {
            return;
        };

        match self.lines.get_mut(index) {
            Some(line) if line.quantity > 1 => line.quantity -= 1,
            Some(_) => {
                self.lines.remove(index);
            }
            None => {}
        }

        if self.lines.is_empty() {
            self.restaurant = None;
        }
    }

    /// Current quantity of the given item, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, item_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map_or(0, |line| line.quantity)
    }

    /// Sum of `unit_price × quantity` over all lines, in cents.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The restaurant this cart is bound to, if any.
    #[must_use]
    pub fn restaurant(&self) -> Option<Uuid> {
        self.restaurant
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Empty the cart and drop the restaurant binding.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.restaurant = None;
    }
}
