//! Orders Domain Module
//!
//! This module contains:
//! - Order models (Order, status, create/update inputs)
//! - The in-memory order store
//! - The `OrderSubmitter` seam used by cart checkout
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod store;
pub mod submitter;

pub use handlers::routes;
pub use models::{Order, OrderStatus};
pub use store::OrderStore;
pub use submitter::OrderSubmitter;
