//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a cart ItemId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(ItemId);

impl ItemId {
    /// Derive the cart line identity for a product.
    ///
    /// The id is content-derived — the slugified product name plus the
    /// category code — so repeated adds of the same product always resolve
    /// to the same line item, in this session and after a reload.
    pub fn for_product(name: &str, category_code: &str) -> Self {
        Self(format!("{}-{}", slug(name), category_code))
    }
}

/// Lowercase a display name and collapse whitespace runs into single dashes.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_gap = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap && !out.is_empty() {
            out.push('-');
        }
        in_gap = false;
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_display() {
        let id = ItemId::new("sweet-mango-tropical");
        assert_eq!(format!("{}", id), "sweet-mango-tropical");
    }

    #[test]
    fn test_item_id_is_content_derived() {
        let a = ItemId::for_product("Sweet Mango", "tropical");
        let b = ItemId::for_product("Sweet Mango", "tropical");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "sweet-mango-tropical");
    }

    #[test]
    fn test_item_id_whitespace_collapse() {
        let id = ItemId::for_product("  Blood   Orange ", "citrus");
        assert_eq!(id.as_str(), "blood-orange-citrus");
    }

    #[test]
    fn test_distinct_products_distinct_ids() {
        let a = ItemId::for_product("Mango", "tropical");
        let b = ItemId::for_product("Kiwi", "tropical");
        assert_ne!(a, b);
    }
}
