//! Order Domain Models

use crate::cart::models::{LineItem, OrderSnapshot};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of an order in the kitchen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

/// A stored order
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    pub items: Vec<LineItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    pub total_items: u64,

    pub order_date: DateTime<Utc>,

    pub status: OrderStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending order with a fresh identifier.
    pub fn from_snapshot(snapshot: OrderSnapshot) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            items: snapshot.items,
            total_price: snapshot.total_price,
            total_items: snapshot.total_items,
            order_date: snapshot.order_date,
            status: OrderStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /api/orders`
///
/// Totals are derived from `items`; when supplied they must agree.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderInput {
    pub items: Vec<LineItem>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_price: Option<Decimal>,

    #[serde(default)]
    pub total_items: Option<u64>,

    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/orders/:id`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderInput {
    pub status: Option<OrderStatus>,

    pub items: Option<Vec<LineItem>>,
}

/// Response for a created order
#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
