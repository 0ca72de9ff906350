//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::calendar::CalendarOptions;
use crate::storage::StorageBackend;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub calendar: CalendarOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the booking collections are kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default)]
    pub backend: StorageBackend,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("clinic-calendar").to_string_lossy().to_string())
        .unwrap_or_else(|| "./clinic_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: StorageBackend::default(),
        }
    }
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        expand_home(&self.data_dir)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.calendar.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("clinic-calendar").join("config.toml")),
            Some(PathBuf::from("./clinic.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(data_dir) = std::env::var("CLINIC_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Ok(backend) = std::env::var("CLINIC_STORAGE_BACKEND") {
            match backend.parse() {
                Ok(b) => self.storage.backend = b,
                Err(e) => tracing::warn!("Ignoring CLINIC_STORAGE_BACKEND: {}", e),
            }
        }

        if let Ok(level) = std::env::var("CLINIC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CLINIC_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Clinic Calendar Configuration
#
# Environment variables override these settings:
# - CLINIC_DATA_DIR
# - CLINIC_STORAGE_BACKEND
# - CLINIC_LOG_LEVEL
# - CLINIC_LOG_FORMAT

[storage]
# Directory holding the booking data
data_dir = "~/.local/share/clinic-calendar"

# Key-value backend: json (local_storage.json) or sqlite (clinic.db)
backend = "json"

[calendar]
# View shown on start: dayGridMonth, timeGridWeek, resourceTimeGridDay
initial_view = "resourceTimeGridDay"

# Visible hours
slot_min_time = "08:00:00"
slot_max_time = "20:00:00"

# Slot length (minutes)
slot_minutes = 30

editable = true
now_indicator = true
display_event_time = true
display_event_end = true
theme = "bootstrap"

# Event colours
event_background_color = "#2ecc71"
event_border_color = "#27ae60"
event_text_color = "#ffffff"

# Allow events on one lane to overlap
event_overlap = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarView;
    use tempfile::tempdir;

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.calendar, CalendarOptions::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [storage]
            backend = "sqlite"

            [calendar]
            initial_view = "dayGridMonth"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.calendar.initial_view, CalendarView::DayGridMonth);
        assert_eq!(config.calendar.slot_minutes, 30);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_calendar_hours_rejected() {
        let result = Config::parse(
            r#"
            [calendar]
            slot_min_time = "18:00:00"
            slot_max_time = "09:00:00"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clinic.toml");
        std::fs::write(&path, "[storage\nbackend = ").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/lib/clinic"), PathBuf::from("/var/lib/clinic"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/clinic"), home.join("clinic"));
        }
    }
}
