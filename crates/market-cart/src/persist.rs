//! Whole-cart persistence under one fixed storage key.

use std::sync::Arc;

use market_kv::KvStore;
use tracing::{error, warn};

use crate::cart::Cart;
use crate::error::CartError;

/// Default storage key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "market:cart";

/// Durable read/write of the entire cart as one JSON value.
///
/// The cart is always written as a full overwrite of the single key; there
/// are no partial-field updates, so the stored value is either the previous
/// cart or the next one, never a mix.
pub struct CartPersistence {
    store: Arc<dyn KvStore>,
    key: String,
}

impl CartPersistence {
    /// Create a persistence layer over `store` using [`CART_STORAGE_KEY`].
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// Override the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Read and deserialize the last durable cart state.
    ///
    /// An absent key means a first run and yields an empty cart. Read and
    /// deserialization failures are surfaced to the caller.
    pub async fn try_load(&self) -> Result<Cart, CartError> {
        match self.store.get(&self.key).await {
            Ok(Some(raw)) => Ok(serde_json::from_str(&raw)?),
            Ok(None) => Ok(Cart::new()),
            Err(e) => Err(CartError::StorageRead(e)),
        }
    }

    /// Load the last durable cart state, falling back to empty on failure.
    ///
    /// A read or deserialization failure is logged and yields an empty
    /// cart; startup keeps running on a fresh cart rather than aborting.
    pub async fn load(&self) -> Cart {
        match self.try_load().await {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart load failed, starting empty");
                Cart::new()
            }
        }
    }

    /// Serialize `cart` and write it under the fixed key.
    ///
    /// Failures are logged here and returned so the caller can refuse to
    /// adopt the unpersisted state.
    pub async fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart)?;
        if let Err(e) = self.store.set(&self.key, &raw).await {
            error!(key = %self.key, error = %e, "cart save failed");
            return Err(CartError::StorageWrite(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;
    use market_kv::InMemoryStore;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(NewItem::new("p1", "Shirt", "https://img/shirt", 10.0))
            .unwrap();
        cart.add(NewItem::new("p2", "Mug", "https://img/mug", 5.5))
            .unwrap();
        cart.add(NewItem::new("p1", "Shirt", "https://img/shirt", 10.0))
            .unwrap();
        cart
    }

    #[tokio::test]
    async fn test_load_on_first_run_is_empty() {
        let persistence = CartPersistence::new(Arc::new(InMemoryStore::new()));
        assert!(persistence.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let persistence = CartPersistence::new(Arc::new(InMemoryStore::new()));
        let cart = sample_cart();

        persistence.save(&cart).await.unwrap();
        assert_eq!(persistence.load().await, cart);
    }

    #[tokio::test]
    async fn test_save_replaces_prior_state_entirely() {
        let persistence = CartPersistence::new(Arc::new(InMemoryStore::new()));
        persistence.save(&sample_cart()).await.unwrap();

        let smaller = Cart::new();
        persistence.save(&smaller).await.unwrap();
        assert_eq!(persistence.load().await, smaller);
    }

    #[tokio::test]
    async fn test_corrupt_payload_falls_back_to_empty() {
        let store = Arc::new(InMemoryStore::new());
        store.set(CART_STORAGE_KEY, "not json").await.unwrap();

        let persistence = CartPersistence::new(Arc::clone(&store) as Arc<dyn KvStore>);
        assert!(matches!(
            persistence.try_load().await,
            Err(CartError::Serialization(_))
        ));
        assert!(persistence.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_store_surfaces_read_failure() {
        use async_trait::async_trait;
        use market_kv::KvError;

        struct DownStore;

        #[async_trait]
        impl KvStore for DownStore {
            async fn get(&self, _key: &str) -> Result<Option<String>, KvError> {
                Err(KvError::Read("store unreachable".to_string()))
            }

            async fn set(&self, _key: &str, _value: &str) -> Result<(), KvError> {
                Err(KvError::Write("store unreachable".to_string()))
            }
        }

        let persistence = CartPersistence::new(Arc::new(DownStore));
        assert!(matches!(
            persistence.try_load().await,
            Err(CartError::StorageRead(_))
        ));
        assert!(persistence.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_with_key_scopes_the_value() {
        let store = Arc::new(InMemoryStore::new());
        let persistence = CartPersistence::new(Arc::clone(&store) as Arc<dyn KvStore>)
            .with_key("market:cart:test");

        persistence.save(&sample_cart()).await.unwrap();
        assert!(store.get(CART_STORAGE_KEY).await.unwrap().is_none());
        assert!(store.get("market:cart:test").await.unwrap().is_some());
    }
}
