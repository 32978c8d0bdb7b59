//! Persistence adapter errors.
//!
//! These never cross the store boundary: the store logs them and carries on
//! with its in-memory state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid json: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("snapshot failed validation: {0}")]
    Invalid(String),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage lock poisoned")]
    Poisoned,
}
