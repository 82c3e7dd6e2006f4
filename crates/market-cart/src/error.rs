//! Cart error types.

use market_kv::KvError;
use thiserror::Error;

use crate::item::ProductId;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Failed to read the cart from durable storage.
    #[error("failed to read cart from storage: {0}")]
    StorageRead(#[source] KvError),

    /// Failed to write the cart to durable storage.
    #[error("failed to write cart to storage: {0}")]
    StorageWrite(#[source] KvError),

    /// Failed to serialize or deserialize the cart.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Incrementing would overflow the item's quantity.
    #[error("quantity overflow for item {0}")]
    QuantityOverflow(ProductId),
}
