//! The key-value store contract.

use async_trait::async_trait;

use crate::KvError;

/// String-keyed durable store.
///
/// Values are opaque string-serialized blobs; callers own the encoding.
/// Implementations must be safe to share across tasks.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `None` if the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Store `value` under `key`, replacing any prior value entirely.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
}
