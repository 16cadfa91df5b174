//! # Berth Core
//!
//! Core library for Berth - a local credential vault and launcher for SSH
//! connection profiles.
//!
//! This crate provides key discovery, password encryption, and the
//! persistent server store independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: SSH key discovery, key derivation, password cipher
//! - **storage**: the vault (servers + settings) and interchange format
//! - **fs**: atomic file writes
//!
//! Passwords rest encrypted only when the user has opted in; the flag and
//! the key path live in the settings file, and the cipher key is derived
//! from the user's own SSH private key, so no master password or extra
//! secret state is ever stored.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod storage;

pub use error::{BerthError, Result};
pub use storage::{ServerRecord, StoredPassword, Vault};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
