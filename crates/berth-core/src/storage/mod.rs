//! Storage layer for Berth.
//!
//! Two JSON files under one config directory hold everything:
//! - `servers.json`: the full record collection
//! - `settings.json`: the encryption flag and its key source
//!
//! The settings flag is the sole source of truth for whether passwords
//! are ciphertext; the servers file itself carries no marker. [`Vault`]
//! applies encryption and decryption transparently per record while
//! loading and saving, so everything above this layer only ever handles
//! plaintext passwords.

pub mod interchange;
pub mod settings;
pub mod types;
pub mod vault;

// Re-export public types
pub use interchange::{export_servers, import_servers, ExportDocument, ExportPolicy};
pub use settings::Settings;
pub use types::{ServerRecord, StoredPassword, VaultFile, VAULT_FORMAT_VERSION};
pub use vault::{find_server, Vault};
