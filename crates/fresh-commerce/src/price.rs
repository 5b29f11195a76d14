//! Price type for display-formatted amounts.
//!
//! Prices are captured as the currency-formatted strings shown on the page
//! (e.g. `"$2.50"`) and parsed to a numeric value on demand. A string that
//! fails to parse is worth 0 in total calculations, never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price as it appears on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Create a price from its display string.
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    /// Create a price from a decimal amount, formatted in dollars.
    ///
    /// ```
    /// use fresh_commerce::price::Price;
    /// let price = Price::from_decimal(2.5);
    /// assert_eq!(price.as_str(), "$2.50");
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self(format!("${:.2}", amount))
    }

    /// Get the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the numeric value out of the display string.
    ///
    /// Every character that is not a digit or a decimal point is stripped
    /// before parsing. Returns 0 if nothing parseable remains.
    pub fn numeric(&self) -> f64 {
        let digits: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().unwrap_or(0.0)
    }

    /// Numeric value in whole cents, rounded.
    pub fn cents(&self) -> i64 {
        (self.numeric() * 100.0).round() as i64
    }

    /// Whether the display string carries no parseable amount.
    pub fn is_unparseable(&self) -> bool {
        !self.0.chars().any(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Price {
    fn from(s: String) -> Self {
        Self(s)
    }
}
