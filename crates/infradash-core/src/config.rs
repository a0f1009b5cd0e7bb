//! Dashboard configuration.
//!
//! Stored as JSON. Every field has a default, so a partial file (or no file
//! at all) yields a usable configuration.

use crate::autoscroll::AutoScrollConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// UI tick rate in milliseconds (clock refresh, input polling).
    pub tick_rate_ms: u64,

    /// Colour theme.
    pub theme: ThemeName,

    /// Icon glyph set.
    pub icons: IconStyle,

    /// Timeline auto-scroll tuning.
    pub autoscroll: AutoScrollConfig,

    /// Where the TUI writes its log. Relative paths resolve against the
    /// config directory.
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            theme: ThemeName::default(),
            icons: IconStyle::default(),
            autoscroll: AutoScrollConfig::default(),
            log_file: None,
        }
    }
}

/// Colour theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// High contrast for accessibility.
    HighContrast,
}

/// Icon glyph set selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Nerd Font glyphs.
    #[default]
    Nerd,
    /// Standard Unicode symbols.
    Unicode,
    /// ASCII only.
    Ascii,
}

impl DashboardConfig {
    /// Load configuration from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Reject values that would stall or break the UI.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".into()));
        }
        if self.autoscroll.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "autoscroll.interval_ms must be positive".into(),
            ));
        }
        if self.autoscroll.step == 0 {
            return Err(ConfigError::Invalid("autoscroll.step must be positive".into()));
        }
        if self.autoscroll.threshold == 0 {
            return Err(ConfigError::Invalid(
                "autoscroll.threshold must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the log file path against the directory holding the config.
    pub fn log_path(&self, config_dir: &Path) -> PathBuf {
        match &self.log_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => config_dir.join("infradash.log"),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.theme, ThemeName::Mocha);
        assert_eq!(config.icons, IconStyle::Nerd);
        assert_eq!(config.autoscroll.threshold, 10);
        assert_eq!(config.autoscroll.step, 5);
        assert_eq!(config.autoscroll.interval_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"theme": "latte", "autoscroll": {"step": 2}}"#).unwrap();
        assert_eq!(config.theme, ThemeName::Latte);
        assert_eq!(config.autoscroll.step, 2);
        assert_eq!(config.autoscroll.threshold, 10);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = DashboardConfig {
            icons: IconStyle::Ascii,
            theme: ThemeName::HighContrast,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = DashboardConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = DashboardConfig::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(loaded, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DashboardConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_step_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"autoscroll": {"step": 0}}"#).unwrap();

        let err = DashboardConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = DashboardConfig::default();
        config.autoscroll.interval_ms = 0;
        assert!(config.validate().is_err());

        let config = DashboardConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_path() {
        let dir = Path::new("/tmp/infradash");
        let config = DashboardConfig::default();
        assert_eq!(config.log_path(dir), dir.join("infradash.log"));

        let config = DashboardConfig {
            log_file: Some(PathBuf::from("logs/ui.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(dir), dir.join("logs/ui.log"));

        let config = DashboardConfig {
            log_file: Some(PathBuf::from("/var/log/infradash.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(dir), PathBuf::from("/var/log/infradash.log"));
    }
}
