//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONFIRMATION: &str = "Thanks for completing the form. We'll be in touch soon!";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Text shown in the dialog after a successful submit
    pub confirmation_message: Option<String>,
    /// Clear the form after a successful submit
    pub reset_on_success: Option<bool>,
    /// Write log output to a file in the config directory
    pub log_to_file: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "contact-form", "contact-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("contact-form-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn confirmation_message(&self) -> &str {
        self.confirmation_message
            .as_deref()
            .unwrap_or(DEFAULT_CONFIRMATION)
    }

    pub fn reset_on_success(&self) -> bool {
        self.reset_on_success.unwrap_or(false)
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.confirmation_message.is_none());
        assert!(config.reset_on_success.is_none());
        assert!(config.log_to_file.is_none());
    }

    #[test]
    fn test_defaults_through_accessors() {
        let config = TuiConfig::default();
        assert_eq!(config.confirmation_message(), DEFAULT_CONFIRMATION);
        assert!(!config.reset_on_success());
        assert!(config.log_to_file());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            confirmation_message: Some("Got it".to_string()),
            reset_on_success: Some(true),
            log_to_file: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = TuiConfig::from_json(&json).unwrap();

        assert_eq!(parsed.confirmation_message(), "Got it");
        assert!(parsed.reset_on_success());
        assert!(!parsed.log_to_file());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::from_json("{}").unwrap();
        assert!(parsed.confirmation_message.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"reset_on_success": true, "unknown_field": "value"}"#;
        let parsed = TuiConfig::from_json(json).unwrap();
        assert_eq!(parsed.reset_on_success, Some(true));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TuiConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_paths_share_a_directory() {
        if let (Some(config), Some(log)) = (TuiConfig::config_path(), TuiConfig::log_path()) {
            assert_eq!(config.parent(), log.parent());
        }
    }
}
