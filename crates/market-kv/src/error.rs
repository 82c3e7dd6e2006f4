//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to a key-value backend.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failed to read a value from the store.
    #[error("store read failed: {0}")]
    Read(String),

    /// Failed to write a value to the store.
    #[error("store write failed: {0}")]
    Write(String),
}
