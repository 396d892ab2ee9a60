//! Order submission seam between a cart and wherever orders are kept.

use crate::cart::models::OrderSnapshot;
use crate::error::Result;

/// Accepts a cart snapshot and returns the new order's identifier.
pub trait OrderSubmitter: Send + Sync {
    fn submit(&self, snapshot: OrderSnapshot) -> Result<String>;
}
