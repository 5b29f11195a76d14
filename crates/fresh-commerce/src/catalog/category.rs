//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The filterable categories on the storefront grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tropical,
    Citrus,
    Berries,
    Orchard,
}

impl Category {
    /// Get the category code used in ids and filter buttons.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Tropical => "tropical",
            Category::Citrus => "citrus",
            Category::Berries => "berries",
            Category::Orchard => "orchard",
        }
    }

    /// Human-readable name for the filter button label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tropical => "Tropical",
            Category::Citrus => "Citrus",
            Category::Berries => "Berries",
            Category::Orchard => "Orchard",
        }
    }

    /// Parse a category code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "tropical" => Some(Category::Tropical),
            "citrus" => Some(Category::Citrus),
            "berries" => Some(Category::Berries),
            "orchard" => Some(Category::Orchard),
            _ => None,
        }
    }

    /// All categories, in filter-bar order.
    pub fn all() -> [Category; 4] {
        [
            Category::Tropical,
            Category::Citrus,
            Category::Berries,
            Category::Orchard,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(Category::from_code("tropical"), Some(Category::Tropical));
        assert_eq!(Category::from_code("CITRUS"), Some(Category::Citrus));
        assert_eq!(Category::from_code("exotic"), None);
    }

    #[test]
    fn test_category_from_str_error() {
        let err = "exotic".parse::<Category>().unwrap_err();
        assert!(matches!(err, CommerceError::UnknownCategory(_)));
    }
}
