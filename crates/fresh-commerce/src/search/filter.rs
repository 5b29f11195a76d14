//! Category filter.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// The state of the category filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show one category only.
    Only(Category),
}

impl CategoryFilter {
    /// Parse the filter-button code (`"all"` or a category code).
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_code(code).map(CategoryFilter::Only)
    }

    /// The code for the active filter button.
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.code(),
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// Live-region text announced when the filter changes.
    pub fn announcement(&self) -> String {
        match self {
            CategoryFilter::All => "Showing all fruits".to_string(),
            CategoryFilter::Only(category) => {
                format!("Showing {} fruits", category.display_name().to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_code() {
        assert_eq!(CategoryFilter::from_code("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_code("citrus"),
            Some(CategoryFilter::Only(Category::Citrus))
        );
        assert_eq!(CategoryFilter::from_code("exotic"), None);
    }

    #[test]
    fn test_filter_matches() {
        let mango = Product::new("Sweet Mango", "$3.00", Category::Tropical);
        assert!(CategoryFilter::All.matches(&mango));
        assert!(CategoryFilter::Only(Category::Tropical).matches(&mango));
        assert!(!CategoryFilter::Only(Category::Citrus).matches(&mango));
    }

    #[test]
    fn test_announcement() {
        assert_eq!(CategoryFilter::All.announcement(), "Showing all fruits");
        assert_eq!(
            CategoryFilter::Only(Category::Berries).announcement(),
            "Showing berries fruits"
        );
    }
}
