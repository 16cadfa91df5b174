//! Error types for Berth core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer will map these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Berth operations.
pub type Result<T> = std::result::Result<T, BerthError>;

/// Core error type for Berth operations.
#[derive(Debug, Error)]
pub enum BerthError {
    /// No acceptable SSH key found to derive the encryption key from
    #[error("No SSH key available: {0}")]
    NoKeyAvailable(String),

    /// The cipher could not be built, so encrypt/decrypt cannot run
    #[error("Encryption unavailable: {0}")]
    EncryptionUnavailable(String),

    /// Ciphertext is invalid, corrupted, or was produced with another key
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for BerthError {
    fn from(err: std::io::Error) -> Self {
        BerthError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BerthError {
    fn from(err: serde_json::Error) -> Self {
        BerthError::Validation(err.to_string())
    }
}
