//! SSH key discovery and key material access.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::error::{BerthError, Result};

/// Key file names accepted as an encryption key source, strongest first.
///
/// Narrower than [`DEFAULT_KEY_NAMES`]: ecdsa/dsa keys can serve as a
/// connection default but are refused as key-derivation input.
pub const ENCRYPTION_KEY_NAMES: [&str; 2] = ["id_ed25519", "id_rsa"];

/// Key file names probed when suggesting a default key for connections.
pub const DEFAULT_KEY_NAMES: [&str; 4] = ["id_ed25519", "id_rsa", "id_ecdsa", "id_dsa"];

/// Find the SSH key to use as the encryption key source.
///
/// Scans `ssh_dir` for [`ENCRYPTION_KEY_NAMES`] in priority order and returns
/// the first file that exists, or `None` when the directory or both files are
/// absent. No side effects.
pub fn encryption_key(ssh_dir: &Path) -> Option<PathBuf> {
    find_first(ssh_dir, &ENCRYPTION_KEY_NAMES)
}

/// Find a default private key to offer for SSH connections.
pub fn default_ssh_key(ssh_dir: &Path) -> Option<PathBuf> {
    find_first(ssh_dir, &DEFAULT_KEY_NAMES)
}

fn find_first(ssh_dir: &Path, names: &[&str]) -> Option<PathBuf> {
    if !ssh_dir.exists() {
        return None;
    }
    names.iter().map(|name| ssh_dir.join(name)).find(|p| p.exists())
}

/// Read the raw bytes of a key file.
///
/// The file can disappear between discovery and read; that race surfaces as
/// a storage error rather than a panic.
pub fn read_key_material(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    std::fs::read(path).map(Zeroizing::new).map_err(|e| {
        BerthError::Storage(format!("Failed to read key file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encryption_key_missing_dir() {
        let dir = tempdir().unwrap();
        let ssh_dir = dir.path().join(".ssh");

        assert_eq!(encryption_key(&ssh_dir), None);
    }

    #[test]
    fn test_encryption_key_prefers_ed25519() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("id_ed25519"), "ed25519-key-content").unwrap();
        std::fs::write(dir.path().join("id_rsa"), "rsa-key-content").unwrap();

        assert_eq!(
            encryption_key(dir.path()),
            Some(dir.path().join("id_ed25519"))
        );
    }

    #[test]
    fn test_encryption_key_rsa_fallback() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("id_rsa"), "rsa-key-content").unwrap();

        assert_eq!(encryption_key(dir.path()), Some(dir.path().join("id_rsa")));
    }

    #[test]
    fn test_encryption_key_none_exist() {
        let dir = tempdir().unwrap();

        assert_eq!(encryption_key(dir.path()), None);
    }

    #[test]
    fn test_encryption_key_refuses_ecdsa() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("id_ecdsa"), "ecdsa-key-content").unwrap();

        assert_eq!(encryption_key(dir.path()), None);
        assert_eq!(
            default_ssh_key(dir.path()),
            Some(dir.path().join("id_ecdsa"))
        );
    }

    #[test]
    fn test_read_key_material() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("id_ed25519");
        std::fs::write(&path, b"key-bytes").unwrap();

        let material = read_key_material(&path).unwrap();
        assert_eq!(&material[..], b"key-bytes");
    }

    #[test]
    fn test_read_key_material_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("id_ed25519");

        let err = read_key_material(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read key file"));
    }
}
