//! Cart engine: owns line items and totals.

use crate::cart::CartItem;
use crate::catalog::{Category, Product};
use crate::ids::ItemId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// The cart engine.
///
/// Holds the ordered list of line items and implements the per-item state
/// machine: first add inserts at quantity 1, repeat adds increment, a
/// decrement to zero (or an explicit remove) deletes the line. Operations
/// never fail; a price that cannot be parsed simply totals as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartEngine {
    items: Vec<CartItem>,
}

impl CartEngine {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from previously persisted items.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line with the same content-derived id already exists its
    /// quantity is incremented; otherwise a new line is inserted with
    /// quantity 1 and a fresh insertion timestamp.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> ItemId {
        let name = name.into();
        let id = ItemId::for_product(&name, category.code());

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return id;
        }

        self.items.push(CartItem::new(id.clone(), name, price));
        id
    }

    /// Add one unit of a catalog product.
    pub fn add_product(&mut self, product: &Product) -> ItemId {
        self.add_item(
            product.name.clone(),
            product.price.clone(),
            product.category,
        )
    }

    /// Remove a line item. Returns false if the id was absent (a no-op).
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero behaves exactly like [`CartEngine::remove_item`].
    /// Returns false if the id was absent.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Sum of numeric price times quantity over all lines.
    ///
    /// Pure and stable: the same multiset of items always yields the same
    /// total regardless of insertion order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total unit count (sum of quantities), for the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by id.
    pub fn get_item(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// All line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the engine and return its items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}
