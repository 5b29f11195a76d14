//! Durable local key-value storage for FreshFruit Paradise.
//!
//! The browser page keeps the cart and the theme preference in local
//! storage: a handful of fixed keys, each holding one JSON value, rewritten
//! in full on every change. This crate provides that same contract on disk,
//! with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_store::Store;
//!
//! let store = Store::open("./.freshfruit")?;
//!
//! // Store a value
//! store.set("fruit-cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = store.get("fruit-cart")?;
//!
//! // Delete a value
//! store.delete("fruit-cart")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::Store;

/// Storage key for the persisted cart state.
pub const CART_KEY: &str = "fruit-cart";

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
