//! Cart Aggregator
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s, unique by name, where every
//! line item has a quantity of at least one. All mutations go through the
//! methods below, so those invariants hold for every cart value in the crate.

use super::models::{LineItem, OrderSnapshot};
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Number of decimal places used for displayed totals.
pub const PRICE_DECIMALS: u32 = 2;

/// Rounds a price to two decimals, midpoint away from zero.
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// The session's working set of line items pending checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `name`.
    ///
    /// An existing line item keeps its stored price; only its quantity grows.
    /// Any price is accepted as-is.
    pub fn add(&mut self, name: &str, price: Decimal) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == name) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::new(name, price));
        }
    }

    /// Removes the line item for `name` entirely, whatever its quantity.
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|i| i.name != name);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Folds `incoming` into the cart, aggregating quantities for names
    /// already present and appending brand new ones.
    ///
    /// Stored prices win over incoming ones, the same as [`Cart::add`].
    /// Zero-quantity entries are dropped.
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = LineItem>) {
        for item in incoming {
            if item.quantity == 0 {
                continue;
            }

            if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            } else {
                self.items.push(item);
            }
        }
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price * quantity`, rounded for display.
    ///
    /// Saturates at the `Decimal` bounds instead of overflowing; use
    /// [`Cart::try_total_price`] to detect that case.
    pub fn total_price(&self) -> Decimal {
        let total = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.saturating_subtotal()));
        round_price(total)
    }

    /// Sum of `price * quantity`, rounded, or `None` if it does not fit in a
    /// `Decimal`.
    pub fn try_total_price(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.checked_subtotal()?))
            .map(round_price)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line item for `name`.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Captures the cart for order submission, stamped with the current time.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            items: self.items.clone(),
            total_price: self.total_price(),
            total_items: self.total_items(),
            order_date: Utc::now(),
        }
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<T: IntoIterator<Item = LineItem>>(iter: T) -> Self {
        let mut cart = Cart::new();
        cart.merge(iter);
        cart
    }
}
