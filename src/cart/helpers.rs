//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for session resolution, checkout and
//! formatting.

use super::aggregator::{round_price, Cart, PRICE_DECIMALS};
use super::models::{CartView, LineItem};
use crate::error::{AppError, Result};
use crate::orders::OrderSubmitter;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use dashmap::{mapref::entry::Entry, DashMap};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Cookie carrying the session's cart identifier.
pub const SESSION_COOKIE: &str = "cart_session";

/// Placeholder shown instead of an itemized list.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Explicit `cart_id` wins over the session identifier.
pub fn get_or_default_cart_id(cart_id: Option<String>, session_id: &str) -> String {
    cart_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| session_id.to_string())
}

/// Reads the session id from the `cart_session` cookie.
///
/// Returns the id and whether it was freshly minted (no usable cookie).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string());

    match existing {
        Some(id) => (id, false),
        None => (get_or_create_cart_id(None), true),
    }
}

/// Adds a `Set-Cookie` header pinning the session id when it was just minted.
pub fn with_session_cookie(mut response: Response, session_id: &str, is_new: bool) -> Response {
    if !is_new {
        return response;
    }

    let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!("Could not encode session cookie: {}", e),
    }

    response
}

/// Current view of a session cart; a missing cart reads as empty.
pub fn view_session_cart(carts: &DashMap<String, Cart>, cart_id: &str) -> CartView {
    match carts.get(cart_id) {
        Some(cart) => CartView::new(cart_id, &cart),
        None => CartView::new(cart_id, &Cart::new()),
    }
}

/// Adds one unit of `name` to the session cart, creating the cart if needed.
///
/// The add is applied to a copy and committed only if the cart's total still
/// fits in a `Decimal`; otherwise the stored cart is untouched.
pub fn add_to_session_cart(
    carts: &DashMap<String, Cart>,
    cart_id: &str,
    name: &str,
    price: Decimal,
) -> Result<CartView> {
    let try_add = |cart: &Cart| -> Result<Cart> {
        let mut next = cart.clone();
        next.add(name, price);
        if next.try_total_price().is_none() {
            return Err(AppError::validation(format!(
                "Cart total would overflow when adding {}",
                name
            )));
        }
        Ok(next)
    };

    match carts.entry(cart_id.to_string()) {
        Entry::Occupied(mut occupied) => {
            let next = try_add(occupied.get())?;
            *occupied.get_mut() = next;
            Ok(CartView::new(cart_id, occupied.get()))
        }
        Entry::Vacant(vacant) => {
            let next = try_add(&Cart::new())?;
            let cart = vacant.insert(next);
            Ok(CartView::new(cart_id, &cart))
        }
    }
}

/// Removes `name` from the session cart; a cart left empty is evicted.
pub fn remove_from_session_cart(
    carts: &DashMap<String, Cart>,
    cart_id: &str,
    name: &str,
) -> CartView {
    if let Some(mut cart) = carts.get_mut(cart_id) {
        cart.remove(name);
    }
    carts.remove_if(cart_id, |_, cart| cart.is_empty());
    view_session_cart(carts, cart_id)
}

/// Clears the session cart by evicting it.
pub fn clear_session_cart(carts: &DashMap<String, Cart>, cart_id: &str) -> CartView {
    carts.remove(cart_id);
    CartView::new(cart_id, &Cart::new())
}

/// Submits the cart's snapshot and evicts the cart on success.
///
/// An empty cart is rejected. On submission failure the cart is left intact
/// so the caller can retry.
pub fn checkout_cart(
    carts: &DashMap<String, Cart>,
    cart_id: &str,
    submitter: &dyn OrderSubmitter,
) -> Result<String> {
    let mut cart = carts
        .get_mut(cart_id)
        .ok_or_else(|| AppError::validation("Cannot place an order with an empty cart"))?;

    if cart.is_empty() {
        return Err(AppError::validation(
            "Cannot place an order with an empty cart",
        ));
    }

    let snapshot = cart.snapshot();
    let summary = format_item_summary(&snapshot.items);

    match submitter.submit(snapshot) {
        Ok(order_id) => {
            tracing::info!(cart_id, order_id = %order_id, "Checked out: {}", summary);
            cart.clear();
            drop(cart);
            carts.remove_if(cart_id, |_, cart| cart.is_empty());
            Ok(order_id)
        }
        Err(e) => {
            tracing::warn!(cart_id, error = %e, "Order submission failed, cart kept");
            Err(e)
        }
    }
}

/// Formats a price as `$10.99`.
pub fn format_price(price: Decimal) -> String {
    let mut rounded = round_price(price);
    rounded.rescale(PRICE_DECIMALS);
    format!("${}", rounded)
}

/// Produces a human-readable one-line summary for a list of line items.
///
/// Example output: `"2x Classic Poke Bowl, 1x Veggie Bowl"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the cart the way the cart panel shows it.
pub fn render_cart_lines(cart: &Cart) -> Vec<String> {
    if cart.is_empty() {
        return vec![EMPTY_CART_MESSAGE.to_string()];
    }

    cart.items()
        .iter()
        .map(|i| format!("{} {} x {}", i.name, format_price(i.price), i.quantity))
        .collect()
}
