//! Search result set and the messages rendered around it.

use crate::catalog::Product;

/// The visible products after filtering and searching, plus the text the
/// page shows next to the search box.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    matches: Vec<&'a Product>,
    query_text: String,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn new(matches: Vec<&'a Product>, query_text: String) -> Self {
        Self {
            matches,
            query_text,
        }
    }

    /// Matching products in display order.
    pub fn matches(&self) -> &[&'a Product] {
        &self.matches
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The result-count line, present only while a query is typed.
    pub fn summary(&self) -> Option<String> {
        if self.query_text.is_empty() {
            return None;
        }
        let plural = if self.matches.len() == 1 { "" } else { "s" };
        Some(format!("Found {} fruit{}", self.matches.len(), plural))
    }

    /// The no-results message, present only when a query matched nothing.
    pub fn no_results_message(&self) -> Option<String> {
        if self.matches.is_empty() && !self.query_text.is_empty() {
            Some(format!(
                "No fruits found for \"{}\". Try a different search term.",
                self.query_text
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::SearchQuery;

    #[test]
    fn test_summary_singular_plural() {
        let catalog = Catalog::sample();
        let one = SearchQuery::new().with_text("kiwi").run(catalog.products());
        assert_eq!(one.summary().as_deref(), Some("Found 1 fruit"));

        let none = SearchQuery::new().with_text("durian").run(catalog.products());
        assert_eq!(none.summary().as_deref(), Some("Found 0 fruits"));
    }

    #[test]
    fn test_summary_absent_without_query() {
        let catalog = Catalog::sample();
        let results = SearchQuery::new().run(catalog.products());
        assert!(results.summary().is_none());
    }

    #[test]
    fn test_no_results_message_quotes_query() {
        let catalog = Catalog::sample();
        let results = SearchQuery::new().with_text("durian").run(catalog.products());
        assert_eq!(
            results.no_results_message().as_deref(),
            Some("No fruits found for \"durian\". Try a different search term.")
        );
    }

    #[test]
    fn test_no_results_message_absent_on_match() {
        let catalog = Catalog::sample();
        let results = SearchQuery::new().with_text("kiwi").run(catalog.products());
        assert!(results.no_results_message().is_none());
    }
}
