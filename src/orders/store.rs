//! In-memory order store
//!
//! Orders are kept in a `DashMap` keyed by order id. Incoming line items are
//! folded through the cart aggregator so every stored order is deduplicated
//! by name and carries totals derived from its items.

use super::models::{NewOrderInput, Order, UpdateOrderInput};
use super::submitter::OrderSubmitter;
use crate::cart::aggregator::{round_price, Cart};
use crate::cart::helpers::format_item_summary;
use crate::cart::models::{LineItem, OrderSnapshot};
use crate::error::{AppError, Result};
use chrono::Utc;
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<String, Order>,
}

/// Rejects empty orders, blank names, zero quantities and totals that do not
/// fit in a `Decimal`, then aggregates.
fn build_cart(items: Vec<LineItem>) -> Result<Cart> {
    if items.is_empty() {
        return Err(AppError::validation("Order must contain at least one item"));
    }

    for item in &items {
        if item.name.trim().is_empty() {
            return Err(AppError::validation("Order item name is required"));
        }
        if item.quantity == 0 {
            return Err(AppError::validation(format!(
                "Quantity for {} must be at least 1",
                item.name
            )));
        }
    }

    let cart: Cart = items.into_iter().collect();
    if cart.try_total_price().is_none() {
        return Err(AppError::validation("Order total is too large"));
    }

    Ok(cart)
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders, newest first.
    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|e| e.value().clone()).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Looks up an order by id.
    pub fn get(&self, id: &str) -> Result<Order> {
        self.orders
            .get(id)
            .map(|e| e.value().clone())
            .ok_or(AppError::NotFound("Order"))
    }

    /// Validates and stores a new pending order.
    pub fn create(&self, input: NewOrderInput) -> Result<Order> {
        let cart = build_cart(input.items)?;
        let mut snapshot = cart.snapshot();

        if let Some(total_items) = input.total_items {
            if total_items != snapshot.total_items {
                return Err(AppError::validation(format!(
                    "totalItems {} does not match items ({})",
                    total_items, snapshot.total_items
                )));
            }
        }
        if let Some(total_price) = input.total_price {
            if round_price(total_price) != snapshot.total_price {
                return Err(AppError::validation(format!(
                    "totalPrice {} does not match items ({})",
                    total_price, snapshot.total_price
                )));
            }
        }
        if let Some(order_date) = input.order_date {
            snapshot.order_date = order_date;
        }

        Ok(self.insert(snapshot))
    }

    fn insert(&self, snapshot: OrderSnapshot) -> Order {
        let order = Order::from_snapshot(snapshot);
        tracing::info!(
            order_id = %order.id,
            total = %order.total_price,
            "Order placed: {}",
            format_item_summary(&order.items)
        );
        self.orders.insert(order.id.clone(), order.clone());
        order
    }

    /// Applies a status change and/or replaces the items, re-deriving totals.
    pub fn update(&self, id: &str, input: UpdateOrderInput) -> Result<Order> {
        let cart = input.items.map(build_cart).transpose()?;

        let mut order = self.orders.get_mut(id).ok_or(AppError::NotFound("Order"))?;

        if let Some(status) = input.status {
            order.status = status;
        }
        if let Some(cart) = cart {
            order.total_items = cart.total_items();
            order.total_price = cart.total_price();
            order.items = cart.items().to_vec();
        }
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    /// Removes an order, returning it.
    pub fn delete(&self, id: &str) -> Result<Order> {
        self.orders
            .remove(id)
            .map(|(_, order)| order)
            .ok_or(AppError::NotFound("Order"))
    }
}

impl OrderSubmitter for OrderStore {
    fn submit(&self, snapshot: OrderSnapshot) -> Result<String> {
        if snapshot.items.is_empty() {
            return Err(AppError::validation(
                "Cannot place an order with an empty cart",
            ));
        }

        Ok(self.insert(snapshot).id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::models::OrderStatus;
    use rust_decimal::Decimal;

    fn item(name: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.into(),
            price: price.parse().unwrap(),
            quantity,
        }
    }

    fn new_order(items: Vec<LineItem>) -> NewOrderInput {
        NewOrderInput {
            items,
            total_price: None,
            total_items: None,
            order_date: None,
        }
    }

    #[test]
    fn test_create_aggregates_duplicate_names() {
        let store = OrderStore::new();
        let order = store
            .create(new_order(vec![
                item("Classic Poke Bowl", "10.99", 1),
                item("Veggie Bowl", "9.99", 1),
                item("Classic Poke Bowl", "10.99", 1),
            ]))
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total_items, 3);
        assert_eq!(order.total_price, "31.97".parse::<Decimal>().unwrap());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_create_rejects_empty_items() {
        let store = OrderStore::new();
        let result = store.create(new_order(vec![]));

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_rejects_zero_quantity() {
        let store = OrderStore::new();
        let result = store.create(new_order(vec![item("Veggie Bowl", "9.99", 0)]));

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_create_and_update_reject_overflowing_total() {
        let store = OrderStore::new();
        let big = Decimal::from_scientific("5e28").unwrap();
        let huge = LineItem {
            name: "Big".into(),
            price: big,
            quantity: 2,
        };

        let result = store.create(new_order(vec![huge.clone()]));
        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert!(store.list().is_empty());

        let order = store
            .create(new_order(vec![item("Veggie Bowl", "9.99", 1)]))
            .unwrap();
        let result = store.update(
            &order.id,
            UpdateOrderInput {
                status: None,
                items: Some(vec![huge]),
            },
        );
        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert_eq!(store.get(&order.id).unwrap(), order);
    }

    #[test]
    fn test_create_rejects_mismatched_totals() {
        let store = OrderStore::new();
        let mut input = new_order(vec![item("Veggie Bowl", "9.99", 2)]);
        input.total_price = Some("5.00".parse().unwrap());

        assert!(store.create(input).is_err());

        let mut input = new_order(vec![item("Veggie Bowl", "9.99", 2)]);
        input.total_price = Some("19.98".parse().unwrap());
        input.total_items = Some(2);

        assert!(store.create(input).is_ok());
    }

    #[test]
    fn test_list_newest_first() {
        let store = OrderStore::new();
        let first = store
            .create(new_order(vec![item("Veggie Bowl", "9.99", 1)]))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store
            .create(new_order(vec![item("Chips & Salsa", "3.50", 1)]))
            .unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_update_status_and_items() {
        let store = OrderStore::new();
        let order = store
            .create(new_order(vec![item("Veggie Bowl", "9.99", 1)]))
            .unwrap();

        let updated = store
            .update(
                &order.id,
                UpdateOrderInput {
                    status: Some(OrderStatus::Preparing),
                    items: Some(vec![item("Spicy Tuna Bowl", "11.99", 3)]),
                },
            )
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Preparing);
        assert_eq!(updated.total_items, 3);
        assert_eq!(updated.total_price, "35.97".parse::<Decimal>().unwrap());
        assert!(updated.updated_at >= order.updated_at);
        assert_eq!(store.get(&order.id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_order() {
        let store = OrderStore::new();
        let result = store.update("missing", UpdateOrderInput::default());

        assert!(matches!(result, Err(AppError::NotFound("Order"))));
    }

    #[test]
    fn test_delete() {
        let store = OrderStore::new();
        let order = store
            .create(new_order(vec![item("Veggie Bowl", "9.99", 1)]))
            .unwrap();

        assert!(store.delete(&order.id).is_ok());
        assert!(matches!(store.get(&order.id), Err(AppError::NotFound(_))));
        assert!(store.delete(&order.id).is_err());
    }

    #[test]
    fn test_submit_snapshot() {
        let store = OrderStore::new();
        let mut cart = Cart::new();
        cart.add("Chips & Salsa", "3.50".parse().unwrap());

        let id = store.submit(cart.snapshot()).unwrap();

        assert_eq!(store.get(&id).unwrap().total_items, 1);
        assert!(store.submit(Cart::new().snapshot()).is_err());
    }
}
