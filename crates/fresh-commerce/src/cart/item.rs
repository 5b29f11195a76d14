//! Cart line item type.

use crate::ids::ItemId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// One purchasable line entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Content-derived line identity.
    pub id: ItemId,
    /// Product display name.
    pub name: String,
    /// Price as captured from the product card.
    pub price: Price,
    /// Quantity, always >= 1 while the item is present.
    pub quantity: u32,
    /// RFC 3339 timestamp of first insertion. Set once, never updated.
    #[serde(rename = "addedAt")]
    pub added_at: String,
}

impl CartItem {
    /// Create a new line item with quantity 1.
    pub fn new(id: ItemId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity: 1,
            added_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Line subtotal: numeric price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price.numeric() * f64::from(self.quantity)
    }
}
