//! Timestamp formatting for log lines
//!
//! Lines are stamped in local time, matching what a person tails on the
//! device.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Per-line timestamp format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Wall-clock time with milliseconds: `14:03:25.118`
    ///
    /// The default; log files carry the date in their name, so lines only
    /// need the time of day.
    #[default]
    ClockMillis,

    /// Full ISO 8601 date and time: `2025-01-08T14:03:25.118`
    Iso8601,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use applog::core::TimeFormat;
    ///
    /// let format = TimeFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimeFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimeFormat::ClockMillis => datetime.format("%H:%M:%S%.3f").to_string(),
            TimeFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimeFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current local time.
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 14, 3, 25)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(118)
    }

    #[test]
    fn test_clock_millis() {
        assert_eq!(TimeFormat::ClockMillis.format(&fixed_datetime()), "14:03:25.118");
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            TimeFormat::Iso8601.format(&fixed_datetime()),
            "2025-01-08T14:03:25.118"
        );
    }

    #[test]
    fn test_custom() {
        let format = TimeFormat::Custom("%H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "14:03");
    }

    #[test]
    fn test_default_is_clock_millis() {
        assert_eq!(TimeFormat::default(), TimeFormat::ClockMillis);
    }
}
