//! File sink configuration

use crate::core::error::{BridgeError, Result};
use crate::core::severity::Severity;
use crate::core::timestamp::TimeFormat;
use serde::{Deserialize, Serialize};

/// Configuration for the file sink.
///
/// # Examples
///
/// ```
/// use applog::sinks::FileSinkConfig;
/// use applog::core::Severity;
///
/// let config = FileSinkConfig::new()
///     .with_min_severity(Severity::Warn)
///     .with_log_dir_name("crash_logs")
///     .with_retention_days(14);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSinkConfig {
    /// Records below this severity are discarded before formatting.
    pub min_severity: Severity,
    /// Subdirectory name under the host storage root.
    pub log_dir_name: String,
    /// Per-line timestamp format.
    pub line_time_format: TimeFormat,
    /// Files last modified more than this many days ago are pruned at
    /// startup.
    pub retention_days: u32,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            log_dir_name: "logs".to_string(),
            line_time_format: TimeFormat::default(),
            retention_days: 7,
        }
    }
}

impl FileSinkConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_dir_name(mut self, name: impl Into<String>) -> Self {
        self.log_dir_name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_line_time_format(mut self, format: TimeFormat) -> Self {
        self.line_time_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Check that the configuration can produce a usable log directory.
    pub fn validate(&self) -> Result<()> {
        if self.log_dir_name.is_empty() {
            return Err(BridgeError::config("FileSink", "empty log directory name"));
        }
        if self.log_dir_name.contains(['/', '\\']) {
            return Err(BridgeError::config(
                "FileSink",
                format!("log directory name '{}' contains a path separator", self.log_dir_name),
            ));
        }
        Ok(())
    }
}
