//! Cryptographic operations for Berth.
//!
//! Passwords at rest are protected with Fernet (AES-128-CBC plus
//! HMAC-SHA256), keyed from the user's own SSH private key:
//! - **PBKDF2-HMAC-SHA256**: turns the key file bytes into a Fernet key
//! - **Fernet**: authenticated tokens, so corruption is detected, never
//!   decrypted into garbage
//!
//! ## Security Model
//!
//! - The SSH private key never leaves the machine and is never stored by
//!   Berth; only bytes read from it at call time feed the derivation.
//! - Derived key material is zeroized from memory on drop.
//! - The salt and iteration count are fixed so the same key file always
//!   yields the same Fernet key across runs and machines.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Casual reading of the servers file (backups, shared dotfiles)
//! - Silent corruption or tampering of stored ciphertext
//!
//! We do NOT defend against:
//! - An attacker who can read the SSH private key itself
//! - Compromised OS / access to the unlocked session

pub mod cipher;
pub mod kdf;
pub mod keyfile;

pub use cipher::{decrypt_password, encrypt_password, looks_encrypted, PasswordCipher};
pub use kdf::{derive_key, DerivedKey};
pub use keyfile::{default_ssh_key, encryption_key};
