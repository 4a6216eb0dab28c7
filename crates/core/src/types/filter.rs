//! Catalog filter criteria.

use serde::{Deserialize, Serialize};

use super::animation::{AnimationCategory, Difficulty};

/// Price tier constraint for catalog searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// No price constraint.
    #[default]
    All,
    /// Exclude premium entries.
    Free,
    /// Exclude non-premium entries.
    Premium,
}

/// Request-scoped search criteria. Never persisted.
///
/// Each unset field matches everything; an entry must satisfy every set
/// field to be returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title, description, and tags.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<AnimationCategory>,
    #[serde(default)]
    pub price: PriceTier,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl FilterCriteria {
    /// Criteria that match every entry.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether any field constrains the result set.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.price != PriceTier::All
            || self.difficulty.is_some()
    }

    /// Restrict to a category.
    #[must_use]
    pub fn with_category(mut self, category: AnimationCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to a free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to a price tier.
    #[must_use]
    pub const fn with_price(mut self, price: PriceTier) -> Self {
        self.price = price;
        self
    }

    /// Restrict to a difficulty.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}
