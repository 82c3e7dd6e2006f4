//! Key-value persistence boundary for the marketplace cart.
//!
//! The cart core treats durable storage as an opaque string-keyed store with
//! `get`/`set` over string-serialized values. This crate defines that
//! contract ([`KvStore`]) plus an in-memory backend for development and
//! tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use market_kv::{InMemoryStore, KvStore};
//!
//! let store = InMemoryStore::new();
//! store.set("cart:items", "[]").await?;
//! let raw = store.get("cart:items").await?;
//! ```

mod error;
mod kv;
mod memory;

pub use error::KvError;
pub use kv::KvStore;
pub use memory::InMemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{InMemoryStore, KvError, KvStore};
}
