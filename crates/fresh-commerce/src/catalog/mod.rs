//! Product catalog module.
//!
//! Contains product and category types plus the sample fruit range the
//! storefront page ships with.

mod category;
mod product;

pub use category::Category;
pub use product::{emoji_for, Product};

use crate::error::CommerceError;
use crate::ids::ProductId;

/// The product catalog backing the storefront grid.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fruit range from the storefront page.
    pub fn sample() -> Self {
        Self::from_products(vec![
            Product::new("Sweet Mango", "$3.00", Category::Tropical)
                .with_description("Juicy, sun-ripened mangoes straight from the grove."),
            Product::new("Golden Pineapple", "$4.50", Category::Tropical)
                .with_description("Sweet and tangy pineapple, picked at peak ripeness."),
            Product::new("Fresh Coconut", "$3.75", Category::Tropical)
                .with_description("Young coconuts full of refreshing water and soft flesh."),
            Product::new("Kiwi", "$1.50", Category::Tropical)
                .with_description("Tart green kiwi with a bright tropical finish."),
            Product::new("Valencia Orange", "$2.25", Category::Citrus)
                .with_description("Classic juicing orange, heavy with sweet juice."),
            Product::new("Meyer Lemon", "$1.75", Category::Citrus)
                .with_description("Thin-skinned lemons with a floral, gentle acidity."),
            Product::new("Garden Strawberry", "$2.50", Category::Berries)
                .with_description("Small, fragrant strawberries picked this morning."),
            Product::new("Wild Blueberry", "$3.25", Category::Berries)
                .with_description("Tiny wild blueberries bursting with flavor."),
            Product::new("Honeycrisp Apple", "$2.00", Category::Orchard)
                .with_description("Crisp, sweet-tart apples from the orchard."),
        ])
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a product by its display name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))
    }

    /// Add a product to the catalog.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }
}
