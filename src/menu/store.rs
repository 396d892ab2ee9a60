//! In-memory menu catalog

use super::models::MenuItem;
use crate::error::{AppError, Result};
use rust_decimal::Decimal;

/// Dishes loaded at startup: name, description, price in cents, category.
const SEED_MENU: &[(&str, &str, i64, &str)] = &[
    ("Classic Poke Bowl", "Salmon, rice, greens, house sauce", 1099, "main"),
    ("Spicy Tuna Bowl", "Tuna, spicy mayo, cucumber", 1199, "main"),
    ("Veggie Bowl", "Tofu, avocado, mixed veggies", 999, "main"),
    ("Chips & Salsa", "Crispy chips with fresh salsa", 350, "appetizer"),
];

/// Read-only list of menu items, in insertion order
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Wraps an already-built list of items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Builds the store from the restaurant's starting menu.
    pub fn seeded() -> Result<Self> {
        let items = SEED_MENU
            .iter()
            .map(|(name, description, cents, category)| {
                MenuItem::new(name, description, Decimal::new(*cents, 2), Some(*category))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Seeded {} menu items", items.len());
        for item in &items {
            tracing::debug!("- {}: ${}", item.name, item.price);
        }

        Ok(Self::new(items))
    }

    /// All items in seed order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(AppError::NotFound("Menu item"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_menu() {
        let store = MenuStore::seeded().unwrap();

        assert_eq!(store.list().len(), 4);
        assert_eq!(store.list()[0].name, "Classic Poke Bowl");

        let chips = &store.list()[3];
        assert_eq!(chips.name, "Chips & Salsa");
        assert_eq!(chips.price, "3.50".parse::<Decimal>().unwrap());
        assert_eq!(chips.category, "appetizer");
    }

    #[test]
    fn test_get_by_id() {
        let store = MenuStore::seeded().unwrap();
        let id = store.list()[1].id.clone();

        assert_eq!(store.get(&id).unwrap().name, "Spicy Tuna Bowl");
        assert!(matches!(store.get("nope"), Err(AppError::NotFound(_))));
    }
}
