//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
///
/// Only connection settings live here. Applicant data is never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the scoring service
    pub scoring_url: Option<String>,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    pub connect_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "fintech-approve", "approve-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.scoring_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.connect_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            scoring_url: Some("http://localhost:8000".to_string()),
            request_timeout_secs: Some(10),
            connect_timeout_secs: Some(2),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.scoring_url, Some("http://localhost:8000".to_string()));
        assert_eq!(parsed.request_timeout_secs, Some(10));
        assert_eq!(parsed.connect_timeout_secs, Some(2));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.scoring_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"scoring_url": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.scoring_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("approve-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"request_timeout_secs": 45}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.request_timeout_secs, Some(45));
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!("approve-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_returns_ok() {
        // Load should return default config when file doesn't exist
        assert!(TuiConfig::load().is_ok());
    }
}
