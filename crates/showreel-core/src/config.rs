//! Editor configuration
//!
//! Read from `showreel.json` in the data directory. Every field is optional;
//! a missing file means all defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enhance::EnhancementConfig;
use crate::error::PortfolioError;
use crate::gate::GateConfig;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Config file name inside the data directory
pub const CONFIG_FILE: &str = "showreel.json";

/// Database file name inside the data directory
pub const DATABASE_FILE: &str = "showreel.redb";

/// When edits reach storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SaveMode {
    /// Write on every mutation
    #[default]
    Immediate,
    /// Coalesce writes until edits pause for `millis`
    Debounced { millis: u64 },
}

impl SaveMode {
    pub fn quiet_period(&self) -> Option<Duration> {
        match self {
            SaveMode::Immediate => None,
            SaveMode::Debounced { millis } => Some(Duration::from_millis(*millis)),
        }
    }
}

/// What to do with session-only media references when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransientPolicy {
    /// Save them and log a warning
    #[default]
    Warn,
    /// Leave them out of the saved copy
    Strip,
}

/// Editor settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Storage key; `None` uses the default versioned key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
    pub save_mode: SaveMode,
    pub transient_policy: TransientPolicy,
    pub gate: GateConfig,
    pub enhancement: EnhancementConfig,
}

impl EditorConfig {
    /// Load `showreel.json` from `data_dir`, or defaults if absent
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        Self::load_file(data_dir.as_ref().join(CONFIG_FILE))
    }

    /// Load a config file, or defaults if it does not exist
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| PortfolioError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// Database path inside `data_dir`
    pub fn database_path(data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(DATABASE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = EditorConfig::load(dir.path()).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.storage_key(), DEFAULT_STORAGE_KEY);
        assert_eq!(config.gate.taps, 5);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{
                "save_mode": {"mode": "debounced", "millis": 750},
                "transient_policy": "strip",
                "gate": {"taps": 7},
                "enhancement": {"timeout_secs": 10, "model": "ignored"}
            }"#,
        )
        .unwrap();

        let config = EditorConfig::load(dir.path()).unwrap();
        assert_eq!(config.save_mode.quiet_period(), Some(Duration::from_millis(750)));
        assert_eq!(config.transient_policy, TransientPolicy::Strip);
        assert_eq!(config.gate.taps, 7);
        assert_eq!(config.gate.window_ms, 3_000);
        assert_eq!(config.enhancement.timeout_secs, 10);
        assert!(config.enhancement.api_key.is_none());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "save_mode = 1").unwrap();

        let result = EditorConfig::load(dir.path());
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_database_path() {
        let path = EditorConfig::database_path("/tmp/showreel");
        assert_eq!(path, PathBuf::from("/tmp/showreel/showreel.redb"));
    }
}
