//! In-memory store backend (for development/testing).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{KvError, KvStore};

/// HashMap-backed [`KvStore`].
///
/// Durable only for the lifetime of the process; useful as the development
/// backend and as the baseline store in tests.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
