//! Poke Bowl ordering backend
//!
//! A menu, per-session shopping carts built on a single cart aggregator, and
//! an order service, exposed as a JSON REST API.

// Domain modules
pub mod cart;
pub mod menu;
pub mod orders;

// Infrastructure
pub mod config;
pub mod error;
pub mod logger;
pub mod router;
pub mod state;
