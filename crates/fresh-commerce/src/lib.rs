//! Storefront domain types and cart logic for FreshFruit Paradise.
//!
//! This crate provides the pure, I/O-free half of the storefront:
//!
//! - **Catalog**: Products, categories, the sample fruit range
//! - **Cart**: The cart engine with line items and totals
//! - **Search**: Category filters, text search, sorting
//!
//! Persistence, notifications, and display refresh live in the page layer;
//! everything here is deterministic and testable without a runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_commerce::prelude::*;
//!
//! let mut cart = CartEngine::new();
//! cart.add_item("Sweet Mango", Price::new("$3.00"), Category::Tropical);
//! cart.add_item("Sweet Mango", Price::new("$3.00"), Category::Tropical);
//!
//! assert_eq!(cart.unique_item_count(), 1);
//! assert!((cart.total() - 6.0).abs() < f64::EPSILON);
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartEngine, CartItem};

    // Search
    pub use crate::search::{CategoryFilter, SearchQuery, SearchResults, SortOption};
}
