//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - The cart aggregator (line items, add/remove/clear, totals)
//! - Domain models (LineItem, snapshots, inputs, views)
//! - Business logic helpers (session resolution, checkout, formatting)
//! - REST API handlers

pub mod aggregator;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use aggregator::Cart;
pub use handlers::routes;
pub use models::{CartView, LineItem, OrderSnapshot};
