//! Console sink implementation

use crate::core::record::LogRecord;
use crate::core::severity::Severity;
use crate::core::sink::Sink;
use crate::core::timestamp::TimeFormat;
#[cfg(feature = "console")]
use colored::Colorize;

/// Prints every record to the terminal, in the same line shape the file
/// sink persists. `Error` and `Assert` go to stderr, everything else to
/// stdout. This is the one sink that surfaces the attached error payload.
pub struct ConsoleSink {
    use_colors: bool,
    time_format: TimeFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            time_format: TimeFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            time_format: TimeFormat::default(),
        }
    }

    /// Set the timestamp format for this sink
    #[must_use]
    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    fn format_text(&self, record: &LogRecord<'_>) -> String {
        let code = if self.use_colors {
            self.colored_code(record.severity)
        } else {
            record.severity.code().to_string()
        };

        let mut line = format!(
            "{} {}/{} : {}",
            self.time_format.format_now(),
            code,
            record.tag.unwrap_or(""),
            record.message
        );

        if let Some(error) = record.error {
            line.push_str(&format!("\n  caused by: {}", error));
            let mut source = error.source();
            while let Some(cause) = source {
                line.push_str(&format!("\n  caused by: {}", cause));
                source = cause.source();
            }
        }

        line
    }

    #[cfg(feature = "console")]
    fn colored_code(&self, severity: Severity) -> String {
        severity.code().color(severity.color_code()).to_string()
    }

    #[cfg(not(feature = "console"))]
    fn colored_code(&self, severity: Severity) -> String {
        severity.code().to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn record(&self, record: &LogRecord<'_>) {
        let output = self.format_text(record);
        match record.severity {
            Severity::Error | Severity::Assert => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_code_and_tag() {
        let sink = ConsoleSink::with_colors(false);
        let record = LogRecord::new(Severity::Debug, "ping").with_tag("net");
        let line = sink.format_text(&record);
        assert!(line.contains(" D/net : ping"), "line: {}", line);
    }

    #[test]
    fn test_format_appends_error_chain() {
        let sink = ConsoleSink::with_colors(false);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "root cause");
        let record = LogRecord::new(Severity::Error, "request failed")
            .with_tag("http")
            .with_error(&err);

        let line = sink.format_text(&record);
        assert!(line.contains("request failed"));
        assert!(line.contains("caused by: root cause"));
    }
}
