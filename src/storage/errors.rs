use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Io(#[from] io::Error),
    #[error("Storage error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: Key [{0}] is not a valid storage key")]
    InvalidKey(String),
    #[error("Storage error: Stored data is invalid: {0}")]
    InvalidData(String)
}
