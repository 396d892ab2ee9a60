//! Menu Domain Models

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "main";

/// A dish on the menu
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub category: String,

    pub available: bool,

    pub image_url: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Builds an available menu item with trimmed text fields.
    ///
    /// Name and description must be non-blank and the price non-negative.
    pub fn new(
        name: &str,
        description: &str,
        price: Decimal,
        category: Option<&str>,
    ) -> Result<Self> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() {
            return Err(AppError::validation("Menu item name is required"));
        }
        if description.is_empty() {
            return Err(AppError::validation("Menu item description is required"));
        }
        if price < Decimal::ZERO {
            return Err(AppError::validation("Menu item price must be at least 0"));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            available: true,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        })
    }
}
