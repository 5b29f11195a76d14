//! Catalog search, filtering, and sorting.
//!
//! Mirrors the storefront controls: the category filter bar, the search box,
//! and the sort select. A product is visible iff it passes both the active
//! filter and the search query.

mod filter;
mod query;
mod results;

pub use filter::CategoryFilter;
pub use query::{SearchQuery, SortOption};
pub use results::SearchResults;
