//! Error taxonomy for the read model
//!
//! Any store I/O failure aborts the whole read call; partial snapshots
//! are never returned.

use thiserror::Error;

/// Store-level I/O failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("key-value store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Failure of one aggregation or hydration call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("malformed store record at {key}: {reason}")]
    BadRecord { key: String, reason: String },
}
