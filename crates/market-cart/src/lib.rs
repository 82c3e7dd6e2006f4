//! Shopping cart state and persistence sync for the marketplace.
//!
//! The cart lives in memory and is kept durable across process restarts by
//! writing the full state to a key-value store after every mutation:
//!
//! - **Cart / LineItem**: the ordered, unique-by-id line-item list and its
//!   transitions (add, increment, decrement).
//! - **CartPersistence**: whole-cart JSON load/save under one fixed key.
//! - **CartStore**: the authoritative store; every mutation computes the
//!   next state, persists it, and adopts it only once the write succeeds.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use market_cart::prelude::*;
//! use market_kv::InMemoryStore;
//!
//! let persistence = CartPersistence::new(Arc::new(InMemoryStore::new()));
//! let store = CartStore::hydrate(persistence).await;
//!
//! store.add_to_cart(NewItem::new("p1", "Shirt", "https://img/shirt", 49.90)).await?;
//! store.increment(&ProductId::new("p1")).await?;
//!
//! for item in store.products().await {
//!     println!("{} x{}", item.title, item.quantity);
//! }
//! ```

pub mod cart;
pub mod error;
pub mod item;
pub mod persist;
pub mod store;

pub use cart::Cart;
pub use error::CartError;
pub use item::{LineItem, NewItem, ProductId};
pub use persist::{CartPersistence, CART_STORAGE_KEY};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::Cart;
    pub use crate::error::CartError;
    pub use crate::item::{LineItem, NewItem, ProductId};
    pub use crate::persist::CartPersistence;
    pub use crate::store::CartStore;
}
