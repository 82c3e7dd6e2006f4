//! The authoritative cart store.

use tokio::sync::Mutex;

use crate::cart::Cart;
use crate::error::CartError;
use crate::item::{LineItem, NewItem, ProductId};
use crate::persist::CartPersistence;

/// Authoritative in-memory cart, kept in sync with durable storage.
///
/// Every mutation follows the same shape: take the lock, compute the next
/// state from the current one, persist the next state, and adopt it only
/// once the write has succeeded. The lock is held across the persistence
/// write, so mutations are serialized per store instance and two mutations
/// can never interleave on a stale snapshot (the lost-update hazard).
///
/// A failed save leaves the in-memory cart untouched and surfaces the error
/// to the caller; memory and durable store never diverge on a completed
/// mutation.
pub struct CartStore {
    cart: Mutex<Cart>,
    persistence: CartPersistence,
}

impl CartStore {
    /// Build a store hydrated from the last durable state.
    ///
    /// A first run, an unreachable store, or a corrupt payload all start
    /// from an empty cart (see [`CartPersistence::load`]).
    pub async fn hydrate(persistence: CartPersistence) -> Self {
        let cart = persistence.load().await;
        Self {
            cart: Mutex::new(cart),
            persistence,
        }
    }

    /// Snapshot of the current line items, in insertion order.
    ///
    /// Pure read; no persistence is triggered.
    pub async fn products(&self) -> Vec<LineItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Add a candidate item to the cart.
    ///
    /// An id already in the cart bumps that entry's quantity instead of
    /// creating a duplicate row; otherwise the item is appended with
    /// quantity 1.
    pub async fn add_to_cart(&self, candidate: NewItem) -> Result<(), CartError> {
        let mut current = self.cart.lock().await;
        let mut next = current.clone();
        next.add(candidate)?;
        self.persistence.save(&next).await?;
        *current = next;
        Ok(())
    }

    /// Increase the matching item's quantity by 1.
    ///
    /// A missing id leaves the list unchanged but still persists it, so the
    /// call stays idempotent-safe rather than erroring.
    pub async fn increment(&self, id: &ProductId) -> Result<(), CartError> {
        let mut current = self.cart.lock().await;
        let mut next = current.clone();
        next.increment(id)?;
        self.persistence.save(&next).await?;
        *current = next;
        Ok(())
    }

    /// Decrease the matching item's quantity by 1, removing it at zero.
    ///
    /// A missing id returns without issuing any write.
    pub async fn decrement(&self, id: &ProductId) -> Result<(), CartError> {
        let mut current = self.cart.lock().await;
        let mut next = current.clone();
        if !next.decrement(id) {
            return Ok(());
        }
        self.persistence.save(&next).await?;
        *current = next;
        Ok(())
    }
}
