//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use super::aggregator::Cart;
use super::helpers::render_cart_lines;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for line items
fn default_quantity() -> u32 {
    1
}

/// One distinct product entry in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Name of the product, unique within a cart
    pub name: String,

    /// Unit price stored when the item was first added
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// `price * quantity`, unrounded, or `None` on overflow
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// `price * quantity`, clamped to the `Decimal` bounds
    pub fn saturating_subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Immutable copy of a cart handed to order submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub items: Vec<LineItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    pub total_items: u64,

    pub order_date: DateTime<Utc>,
}

// =============================================================================
// Request Inputs
// =============================================================================

/// Input for adding one unit of an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for removing an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemInput {
    pub name: String,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for operations that only need a cart (view, clear, checkout)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartIdInput {
    /// Optional cart identifier
    pub cart_id: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// Display binding of a cart: raw items, totals and rendered lines
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,

    pub items: Vec<LineItem>,

    pub total_items: u64,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    pub is_empty: bool,

    /// Placeholder line for an empty cart, one line per item otherwise
    pub display: Vec<String>,
}

impl CartView {
    pub fn new(cart_id: impl Into<String>, cart: &Cart) -> Self {
        Self {
            cart_id: cart_id.into(),
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            is_empty: cart.is_empty(),
            display: render_cart_lines(cart),
        }
    }
}

/// Response for a successful checkout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,

    pub order_id: String,

    pub cart: CartView,
}
