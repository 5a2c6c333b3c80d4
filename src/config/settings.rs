//! Configuration settings for the task runner.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::TaskError;

/// Main configuration structure for the runner.
///
/// Every section is optional; a missing file section falls back to defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("pretty" or "json").
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Whether task outcomes are written to the audit log.
    #[serde(default)]
    pub enabled: bool,
    /// Path to the audit log file.
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("/var/log/fs-tasks/audit.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TaskError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            TaskError::Config { message } => TaskError::Config {
                message: format!("{} (in '{}')", message, path.display()),
            },
            other => other,
        })
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, TaskError> {
        let settings: Settings = toml::from_str(content).map_err(|e| TaskError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), TaskError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(TaskError::Config {
                message: format!(
                    "Invalid log level '{}'. Valid levels: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(TaskError::Config {
                message: format!(
                    "Invalid log format '{}'. Valid formats: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "pretty");
        assert!(!settings.audit.enabled);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.audit.log_path, default_audit_log_path());
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [logging]
            format = "json"

            [audit]
            enabled = true
            log_path = "/tmp/audit.log"
            "#,
        )
        .unwrap();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
        assert!(settings.audit.enabled);
        assert_eq!(settings.audit.log_path, PathBuf::from("/tmp/audit.log"));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let result = Settings::from_toml("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(TaskError::Config { .. })));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Settings::from_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(TaskError::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/nonexistent/fs-tasks.toml");
        assert!(matches!(result, Err(TaskError::Config { .. })));
    }
}
