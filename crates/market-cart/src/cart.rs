//! The cart: an ordered line-item list and its transitions.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::item::{LineItem, NewItem, ProductId};

/// The full ordered set of line items for the current session.
///
/// Items are unique by product id; new items are appended at the end and
/// relative order is preserved across every transition. An item whose
/// quantity reaches zero is removed, never retained.
///
/// Serializes as a plain array of line-item records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate item to the cart.
    ///
    /// If an item with the same id is already present this merges into an
    /// [`increment`](Self::increment) of that entry instead of creating a
    /// duplicate row; otherwise the candidate is appended with quantity 1.
    pub fn add(&mut self, candidate: NewItem) -> Result<(), CartError> {
        if self.contains(&candidate.id) {
            self.increment(&candidate.id)?;
            return Ok(());
        }
        self.items.push(candidate.into_line_item());
        Ok(())
    }

    /// Increase the matching item's quantity by exactly 1.
    ///
    /// A missing id is a benign no-op: `Ok(false)` is returned and the cart
    /// is left unchanged. Overflow of the quantity counter is surfaced as
    /// [`CartError::QuantityOverflow`].
    pub fn increment(&mut self, id: &ProductId) -> Result<bool, CartError> {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return Ok(false);
        };
        item.quantity = item
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;
        Ok(true)
    }

    /// Decrease the matching item's quantity by 1, removing it at zero.
    ///
    /// Returns `false` if no item matches (the cart is unchanged and the
    /// caller should not issue a write). Remaining items keep their relative
    /// order when an entry is removed.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.items.retain(|i| &i.id != id);
        }
        true
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether an item with this id is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
