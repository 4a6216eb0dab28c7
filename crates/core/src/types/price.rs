//! Display-string price representation with decimal parsing.
//!
//! Catalog entries carry their price as a display string ("Free", "$5",
//! "$12.50"). The numeric amount is derived by stripping a leading currency
//! symbol and parsing the remainder as a decimal; anything unparseable
//! (including "Free") is treated as zero. The premium flag on an entry is
//! deliberately independent of the price string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price display string for the "Free" tier.
const FREE_LABEL: &str = "Free";

/// A price as displayed in the catalog.
///
/// Wraps the human-facing price string and derives the numeric amount on
/// demand. The display string is the source of truth; the amount is never
/// stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Create a price from its display string.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    /// The "Free" price.
    #[must_use]
    pub fn free() -> Self {
        Self(FREE_LABEL.to_owned())
    }

    /// The display string, e.g. `"$5"` or `"Free"`.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.0
    }

    /// Numeric amount derived from the display string.
    ///
    /// A leading currency symbol is stripped before parsing. Unparseable
    /// strings (including "Free") yield zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        let trimmed = self.0.trim();
        let digits = trimmed
            .strip_prefix('$')
            .or_else(|| trimmed.strip_prefix('€'))
            .or_else(|| trimmed.strip_prefix('£'))
            .unwrap_or(trimmed);
        digits.trim().parse().unwrap_or(Decimal::ZERO)
    }

    /// Whether the derived amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount() == Decimal::ZERO
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Price {
    fn from(display: &str) -> Self {
        Self::new(display)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_with_dollar_prefix() {
        assert_eq!(Price::new("$5").amount(), Decimal::from(5));
        assert_eq!(Price::new("$12.50").amount(), "12.50".parse().unwrap());
    }

    #[test]
    fn test_amount_free_is_zero() {
        assert_eq!(Price::free().amount(), Decimal::ZERO);
        assert!(Price::free().is_zero());
    }

    #[test]
    fn test_amount_unparseable_is_zero() {
        assert_eq!(Price::new("contact us").amount(), Decimal::ZERO);
        assert_eq!(Price::new("").amount(), Decimal::ZERO);
    }

    #[test]
    fn test_amount_without_symbol() {
        assert_eq!(Price::new("8").amount(), Decimal::from(8));
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new("$5");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"$5\"");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
