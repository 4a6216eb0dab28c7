//! Session cart with derived totals.
//!
//! Cart lines hold a snapshot of the entry taken at add time, so later
//! catalog edits do not retroactively change a cart. Totals are recomputed
//! after every mutation and are never settable directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use motionmart_core::{AnimationEntry, AnimationId, Price};

/// One cart line: an entry snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: AnimationId,
    pub title: String,
    pub price: Price,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    fn snapshot(entry: &AnimationEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            price: entry.price.clone(),
            is_premium: entry.is_premium,
            thumbnail: entry.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}

/// A quantity-keyed collection of cart lines, unique per entry id.
///
/// Serializable so it can live in the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total_items: u32,
    total_price: Decimal,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry: bump the quantity if a line already exists, otherwise
    /// insert a fresh snapshot with quantity 1.
    pub fn add_item(&mut self, entry: &AnimationEntry) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == entry.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::snapshot(entry));
        }
        self.recompute();
    }

    /// Remove the whole line for an id. No-op when absent.
    pub fn remove_item(&mut self, id: AnimationId) {
        self.items.retain(|i| i.id != id);
        self.recompute();
    }

    /// Empty the cart and reset totals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of line quantities.
    #[must_use]
    pub const fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of line totals.
    #[must_use]
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of all lines, e.g. for recording a purchase at checkout.
    #[must_use]
    pub fn item_ids(&self) -> Vec<AnimationId> {
        self.items.iter().map(|i| i.id).collect()
    }

    fn recompute(&mut self) {
        self.total_items = self.items.iter().map(|i| i.quantity).sum();
        self.total_price = self.items.iter().map(CartItem::line_total).sum();
    }
}
