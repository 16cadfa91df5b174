//! Core data types for the storage layer.
//!
//! These types mirror the on-disk JSON shape of the servers file, so
//! everything here derives or hand-implements serde.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::looks_encrypted;

/// Current servers file format version.
pub const VAULT_FORMAT_VERSION: u32 = 1;

/// A password as it sits in a record.
///
/// The two variants carry the same wire representation (a bare JSON
/// string); which one a stored value becomes is decided once, at the
/// untyped-JSON boundary, by the ciphertext classifier. Past that point
/// no caller needs to re-run the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPassword {
    /// Plaintext, exactly as the user entered it.
    Plain(String),

    /// A base64-wrapped authenticated-encryption token.
    Encrypted(String),
}

impl StoredPassword {
    /// Wrap a plaintext value.
    pub fn plain(value: impl Into<String>) -> Self {
        StoredPassword::Plain(value.into())
    }

    /// Classify a raw stored string into the right variant.
    pub fn classify(raw: String) -> Self {
        if looks_encrypted(&raw) {
            StoredPassword::Encrypted(raw)
        } else {
            StoredPassword::Plain(raw)
        }
    }

    /// The raw stored string, whichever variant holds it.
    pub fn as_str(&self) -> &str {
        match self {
            StoredPassword::Plain(s) | StoredPassword::Encrypted(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            StoredPassword::Plain(s) | StoredPassword::Encrypted(s) => s,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, StoredPassword::Encrypted(_))
    }

    /// Whether this counts as a usable password (empty strings do not).
    pub fn is_set(&self) -> bool {
        !self.as_str().is_empty()
    }
}

impl Serialize for StoredPassword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StoredPassword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(StoredPassword::classify(raw))
    }
}

/// One saved SSH server profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Unique identifier, generated when absent from stored data.
    #[serde(default = "generate_id")]
    pub id: String,

    /// User-facing name, also the lookup handle.
    pub name: String,

    /// Hostname or IP address.
    pub host: String,

    /// SSH port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Login user.
    pub username: String,

    /// Stored password, plaintext or ciphertext.
    #[serde(default)]
    pub password: Option<StoredPassword>,

    /// Path to a private key used instead of the password.
    #[serde(default)]
    pub key_path: Option<String>,

    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_port() -> u16 {
    22
}

impl ServerRecord {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            host: host.into(),
            port: default_port(),
            username: username.into(),
            password: None,
            key_path: None,
            tags: Vec::new(),
            notes: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(StoredPassword::plain(password));
        self
    }

    pub fn with_key_path(mut self, key_path: impl Into<String>) -> Self {
        self.key_path = Some(key_path.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether a non-empty password is stored.
    pub fn has_password(&self) -> bool {
        self.password.as_ref().is_some_and(StoredPassword::is_set)
    }

    /// Whether a non-empty key path is set.
    pub fn has_key_path(&self) -> bool {
        self.key_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Short label for how this server authenticates.
    pub fn auth_label(&self) -> &'static str {
        if self.has_key_path() {
            "key"
        } else if self.has_password() {
            "pwd"
        } else {
            "auto"
        }
    }

    /// One-line display form: `name  [user@host:port | auth]`.
    pub fn display(&self) -> String {
        format!(
            "{}  [{}@{}:{} | {}]",
            self.name,
            self.username,
            self.host,
            self.port,
            self.auth_label()
        )
    }
}

/// On-disk shape of the servers file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultFile {
    /// File format version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// All saved server records.
    #[serde(default)]
    pub servers: Vec<ServerRecord>,
}

fn default_version() -> u32 {
    VAULT_FORMAT_VERSION
}

impl Default for VaultFile {
    fn default() -> Self {
        Self {
            version: VAULT_FORMAT_VERSION,
            servers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let server = ServerRecord::new("Test", "example.com", "admin");

        assert!(Uuid::parse_str(&server.id).is_ok());
        assert_eq!(server.port, 22);
        assert!(server.password.is_none());
        assert!(server.key_path.is_none());
        assert!(server.tags.is_empty());
        assert!(server.notes.is_none());
    }

    #[test]
    fn test_record_ids_unique() {
        let a = ServerRecord::new("A", "a.example.com", "root");
        let b = ServerRecord::new("B", "b.example.com", "root");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_auth_label_key() {
        let server = ServerRecord::new("Test", "example.com", "admin")
            .with_key_path("/home/user/.ssh/id_rsa");
        assert_eq!(server.auth_label(), "key");
    }

    #[test]
    fn test_auth_label_password() {
        let server = ServerRecord::new("Test", "example.com", "admin").with_password("secret");
        assert_eq!(server.auth_label(), "pwd");
    }

    #[test]
    fn test_auth_label_neither() {
        let server = ServerRecord::new("Test", "example.com", "admin");
        assert_eq!(server.auth_label(), "auto");
    }

    #[test]
    fn test_auth_label_key_wins_over_password() {
        let server = ServerRecord::new("Test", "example.com", "admin")
            .with_password("secret")
            .with_key_path("/home/user/.ssh/id_rsa");
        assert_eq!(server.auth_label(), "key");
    }

    #[test]
    fn test_auth_label_empty_password() {
        let server = ServerRecord::new("Test", "example.com", "admin").with_password("");
        assert_eq!(server.auth_label(), "auto");
        assert!(!server.has_password());
    }

    #[test]
    fn test_display_format() {
        let server = ServerRecord::new("Web Server", "example.com", "admin")
            .with_port(2222)
            .with_password("secret");
        assert_eq!(
            server.display(),
            "Web Server  [admin@example.com:2222 | pwd]"
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"name": "Minimal", "host": "example.com", "username": "root"}"#;
        let server: ServerRecord = serde_json::from_str(json).unwrap();

        assert!(Uuid::parse_str(&server.id).is_ok());
        assert_eq!(server.port, 22);
        assert!(server.password.is_none());
        assert!(server.tags.is_empty());
    }

    #[test]
    fn test_deserialize_requires_host() {
        let json = r#"{"name": "Broken", "username": "root"}"#;
        assert!(serde_json::from_str::<ServerRecord>(json).is_err());
    }

    #[test]
    fn test_password_classified_at_boundary() {
        let token = format!("Z0FBQUFB{}", "a".repeat(40));
        let json = format!(
            r#"{{"name": "T", "host": "h", "username": "u", "password": "{}"}}"#,
            token
        );
        let server: ServerRecord = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            server.password,
            Some(StoredPassword::Encrypted(ref s)) if s == &token
        ));

        let json = r#"{"name": "T", "host": "h", "username": "u", "password": "hunter2"}"#;
        let server: ServerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(server.password, Some(StoredPassword::plain("hunter2")));
    }

    #[test]
    fn test_password_serializes_as_bare_string() {
        let plain = StoredPassword::plain("hunter2");
        assert_eq!(serde_json::to_string(&plain).unwrap(), r#""hunter2""#);

        let token = format!("Z0FBQUFB{}", "a".repeat(40));
        let encrypted = StoredPassword::classify(token.clone());
        assert!(encrypted.is_encrypted());
        assert_eq!(
            serde_json::to_string(&encrypted).unwrap(),
            format!(r#""{}""#, token)
        );
    }

    #[test]
    fn test_vault_file_tolerates_missing_fields() {
        let parsed: VaultFile = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.version, VAULT_FORMAT_VERSION);
        assert!(parsed.servers.is_empty());
    }
}
