//! Search query and sort options.

use crate::catalog::Product;
use crate::search::{CategoryFilter, SearchResults};
use serde::{Deserialize, Serialize};

/// Sort options for the grid's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Grid order as authored.
    #[default]
    Featured,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }

    /// Parse the select-control value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "featured" => Some(SortOption::Featured),
            "name" => Some(SortOption::NameAsc),
            "name-desc" => Some(SortOption::NameDesc),
            "price-asc" => Some(SortOption::PriceAsc),
            "price-desc" => Some(SortOption::PriceDesc),
            _ => None,
        }
    }

    /// Stable-sort a product list in place.
    pub fn apply(&self, products: &mut Vec<&Product>) {
        match self {
            SortOption::Featured => {}
            SortOption::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
            SortOption::PriceAsc => products.sort_by_key(|p| p.price.cents()),
            SortOption::PriceDesc => products.sort_by_key(|p| std::cmp::Reverse(p.price.cents())),
        }
    }
}

/// The combined state of the search box, filter bar, and sort select.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search box text; empty matches everything.
    pub text: String,
    /// Active category filter.
    pub filter: CategoryFilter,
    /// Active sort.
    pub sort: SortOption,
}

impl SearchQuery {
    /// Create an empty query (all products, featured order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category filter.
    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a product matches the search text (name or description,
    /// case-insensitive substring).
    pub fn matches_text(&self, product: &Product) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// Run the query: filter, search, then sort.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<'a> {
        let mut matches: Vec<&Product> = products
            .iter()
            .filter(|p| self.filter.matches(p) && self.matches_text(p))
            .collect();
        self.sort.apply(&mut matches);

        SearchResults::new(matches, self.text.trim().to_string())
    }
}
