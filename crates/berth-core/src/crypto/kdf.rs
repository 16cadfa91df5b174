//! Key derivation from SSH key material.
//!
//! Derives the vault's symmetric key from the raw bytes of the user's SSH
//! private key via PBKDF2-HMAC-SHA256. The salt is a fixed application-wide
//! constant: the key must be re-derivable from the SSH key file alone, with
//! no other stored state, so it cannot be randomized per install.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed salt for deterministic key derivation. Changing this orphans every
/// password encrypted under the old value.
const KDF_SALT: &[u8] = b"berth-v1-salt-do-not-change";

/// PBKDF2 iteration count, the only brute-force throttle between an attacker
/// holding the vault file and the passwords.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the derived key in bytes (32 bytes = 256 bits).
const KEY_LENGTH: usize = 32;

/// A symmetric key derived from SSH key material.
///
/// Held in the URL-safe base64 form the cipher consumes (44 ASCII chars for
/// 32 bytes). Zeroized from memory on drop and redacted in `Debug` output.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    encoded: String,
}

impl DerivedKey {
    /// Get the URL-safe base64 encoding of the key.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only to construct a cipher.
    pub fn expose(&self) -> &str {
        &self.encoded
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("encoded", &"[REDACTED]")
            .finish()
    }
}

/// Derive the vault key from raw SSH key bytes.
///
/// Pure function: identical input bytes always yield the identical key, and
/// any byte difference yields an unrelated key. No I/O.
pub fn derive_key(key_material: &[u8]) -> DerivedKey {
    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(key_material, KDF_SALT, PBKDF2_ITERATIONS, &mut key_bytes);

    let encoded = URL_SAFE.encode(key_bytes);
    key_bytes.zeroize();

    DerivedKey { encoded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key(b"fixed-key-bytes");
        let key2 = derive_key(b"fixed-key-bytes");

        assert_eq!(key1.expose(), key2.expose());
    }

    #[test]
    fn test_key_is_44_chars_of_base64() {
        let key = derive_key(b"some key material");

        assert_eq!(key.expose().len(), 44);
        assert_eq!(URL_SAFE.decode(key.expose()).unwrap().len(), KEY_LENGTH);
    }

    #[test]
    fn test_different_material_different_key() {
        let key1 = derive_key(b"content1");
        let key2 = derive_key(b"content2");

        assert_ne!(key1.expose(), key2.expose());
    }

    #[test]
    fn test_empty_material_still_derives() {
        let key = derive_key(b"");

        assert_eq!(key.expose().len(), 44);
        assert_ne!(key.expose(), derive_key(b"x").expose());
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key(b"sensitive material");

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains(&key.expose()[..8]));
    }
}
