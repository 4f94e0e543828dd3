//! Error types for the launcher.
//!
//! `StorageError` covers the key-value store port; `ApiError` is what every
//! public operation returns.

use thiserror::Error;

/// Failures of the persistent key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        match err {
            sled::Error::Io(io) => StorageError::IoError(io),
            other => StorageError::Backend(other.to_string()),
        }
    }
}

/// Errors surfaced by registry operations and the embedding layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Terminal write failed: {0}")]
    Terminal(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Preset registry used before initialize()")]
    Uninitialized,
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True when the error came from the persistent store.
    pub fn is_storage(&self) -> bool {
        matches!(self, ApiError::StorageError(_))
    }
}
