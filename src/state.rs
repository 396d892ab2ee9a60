//! Application State
//!
//! Session carts, the menu catalog and the order store shared by all
//! handlers.

use crate::cart::Cart;
use crate::config::Config;
use crate::error::Result;
use crate::menu::MenuStore;
use crate::orders::{OrderStore, OrderSubmitter};
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Session carts keyed by cart id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Cart>,

    pub menu: MenuStore,

    pub orders: Arc<OrderStore>,

    /// Where checkout sends cart snapshots; the order store unless replaced.
    pub submitter: Arc<dyn OrderSubmitter>,
}

impl AppState {
    /// Creates state with empty carts and orders, seeding the menu if enabled.
    pub fn new(config: &Config) -> Result<Self> {
        let menu = if config.seed_menu {
            MenuStore::seeded()?
        } else {
            MenuStore::default()
        };

        let orders = Arc::new(OrderStore::new());

        Ok(Self {
            carts: DashMap::new(),
            menu,
            submitter: orders.clone(),
            orders,
        })
    }

    /// Routes checkout through a different order submission collaborator.
    pub fn with_submitter(mut self, submitter: Arc<dyn OrderSubmitter>) -> Self {
        self.submitter = submitter;
        self
    }
}
