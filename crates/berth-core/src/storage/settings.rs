//! Application settings persisted beside the servers file.

use serde::{Deserialize, Serialize};

/// Contents of `settings.json`.
///
/// Missing or malformed settings files fall back to [`Settings::default`],
/// which means encryption off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Whether passwords are encrypted at rest.
    #[serde(default)]
    pub encryption_enabled: bool,

    /// Path of the SSH key encryption was enabled with. Kept after
    /// disabling so status output can still name it.
    #[serde(default)]
    pub encryption_key_source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_off() {
        let settings = Settings::default();
        assert!(!settings.encryption_enabled);
        assert!(settings.encryption_key_source.is_none());
    }

    #[test]
    fn test_deserialize_empty_object() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(!settings.encryption_enabled);
    }

    #[test]
    fn test_round_trip_keeps_key_source() {
        let settings = Settings {
            encryption_enabled: true,
            encryption_key_source: Some("/home/user/.ssh/id_ed25519".to_string()),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();

        assert!(parsed.encryption_enabled);
        assert_eq!(
            parsed.encryption_key_source.as_deref(),
            Some("/home/user/.ssh/id_ed25519")
        );
    }
}
