// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Runtime log level selection, deserializable from configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerPreferences {
    /// Whether to collect detailed field metrics during scanning
    pub collect_detailed_metrics: bool,

    /// Whether to track per-letter usage counts
    pub track_letter_usage: bool,

    /// Whether to log literal-segment statistics
    pub log_literal_statistics: bool,
}

impl Default for ScannerPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("DTF_SCANNER_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            track_letter_usage: env::var("DTF_SCANNER_TRACK_LETTERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_literal_statistics: env::var("DTF_SCANNER_LOG_LITERAL_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPreferences {
    /// Whether to log per-field classification steps
    pub log_classification_details: bool,

    /// Whether to include span information in error context
    pub include_span_in_errors: bool,

    /// Whether to log validation performance metrics
    pub log_performance_metrics: bool,
}

impl Default for ValidationPreferences {
    fn default() -> Self {
        Self {
            log_classification_details: env::var("DTF_VALIDATION_LOG_DETAILS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_span_in_errors: env::var("DTF_VALIDATION_INCLUDE_SPANS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_performance_metrics: env::var("DTF_VALIDATION_LOG_PERFORMANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to emit JSON events instead of plain text
    pub use_structured_logging: bool,

    /// Whether console logging is enabled at all
    pub enable_console_logging: bool,

    /// Minimum level emitted by the global logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("DTF_LOG_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("DTF_LOG_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: match env::var("DTF_LOG_LEVEL").ok().as_deref() {
                Some("error") => LogLevel::Error,
                Some("warning") => LogLevel::Warning,
                Some("debug") => LogLevel::Debug,
                _ => LogLevel::Info,
            },
        }
    }
}

/// Aggregate configuration, loadable from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub scanner: ScannerPreferences,
    pub validation: ValidationPreferences,
    pub logging: LoggingPreferences,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ValidatorConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing sections and keys fall back to the env-var-backed defaults.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
