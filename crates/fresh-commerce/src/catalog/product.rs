//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product card on the storefront grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier (slug of the name).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display price, captured as shown on the card.
    pub price: Price,
    /// Grid category.
    pub category: Category,
    /// Card description, also searched by the search box.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, price: impl Into<Price>, category: Category) -> Self {
        let name = name.into();
        let id = ProductId::new(name.to_lowercase().replace(' ', "-"));
        Self {
            id,
            name,
            price: price.into(),
            category,
            description: String::new(),
        }
    }

    /// Set the card description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Emoji glyph shown when the product image is unavailable.
    pub fn emoji(&self) -> &'static str {
        emoji_for(&self.name)
    }
}

/// Map a product name to its fallback emoji glyph.
///
/// Matching is by substring, so "Sweet Mango" and "Mango" both resolve.
/// Unknown fruits get the apple.
pub fn emoji_for(name: &str) -> &'static str {
    const GLYPHS: [(&str, &str); 8] = [
        ("mango", "\u{1F96D}"),
        ("pineapple", "\u{1F34D}"),
        ("coconut", "\u{1F965}"),
        ("orange", "\u{1F34A}"),
        ("lemon", "\u{1F34B}"),
        ("strawberry", "\u{1F353}"),
        ("blueberry", "\u{1FAD0}"),
        ("apple", "\u{1F34E}"),
    ];

    let lower = name.to_lowercase();
    GLYPHS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, glyph)| *glyph)
        .unwrap_or("\u{1F34E}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_name() {
        let product = Product::new("Sweet Mango", "$3.00", Category::Tropical);
        assert_eq!(product.id.as_str(), "sweet-mango");
    }

    #[test]
    fn test_emoji_substring_match() {
        assert_eq!(emoji_for("Sweet Mango"), "\u{1F96D}");
        assert_eq!(emoji_for("Golden Pineapple"), "\u{1F34D}");
    }

    #[test]
    fn test_emoji_fallback() {
        assert_eq!(emoji_for("Kiwi"), "\u{1F34E}");
    }
}
