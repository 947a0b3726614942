//! File sink: severity filtering on the caller's thread, persistence on a
//! dedicated worker.

pub mod config;
pub mod housekeeping;
pub mod writer;

pub use config::FileSinkConfig;
pub use writer::FileWriter;

use crate::core::host::HostEnv;
use crate::core::record::LogRecord;
use crate::core::severity::Severity;
use crate::core::sink::Sink;
use crate::core::Result;
use std::sync::Arc;

/// Persists a filtered subset of log records to rotating files.
///
/// Records at or above the configured threshold are formatted as
/// `<time> <code>/<tag> : <message>` and queued for the background writer;
/// everything below the threshold is discarded with no side effect. The
/// ingestion path never performs I/O.
///
/// # Example
///
/// ```no_run
/// use applog::core::{DirHost, Severity};
/// use applog::sinks::FileSink;
///
/// # fn main() -> applog::core::Result<()> {
/// let host = DirHost::new("/data/app").with_version("1.4.2");
/// let sink = FileSink::create(&host, Severity::Info)?;
/// // ... install into a SinkRegistry ...
/// sink.stop();
/// # Ok(())
/// # }
/// ```
pub struct FileSink {
    config: FileSinkConfig,
    writer: FileWriter,
}

impl FileSink {
    /// Build a sink from a validated configuration. The writer is not
    /// started yet; call [`FileSink::start`].
    pub fn new(config: FileSinkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            writer: FileWriter::new(),
        })
    }

    /// Construct with default configuration at the given threshold and
    /// start the writer immediately.
    pub fn create(host: &dyn HostEnv, min_severity: Severity) -> Result<Arc<Self>> {
        let sink = Self::new(FileSinkConfig::new().with_min_severity(min_severity))?;
        sink.start(host)?;
        Ok(Arc::new(sink))
    }

    pub fn config(&self) -> &FileSinkConfig {
        &self.config
    }

    /// Start (or restart) the background writer. Startup housekeeping runs
    /// on the calling thread; see [`FileWriter::start`].
    pub fn start(&self, host: &dyn HostEnv) -> Result<()> {
        self.writer.start(host, &self.config)
    }

    /// Stop the background writer. Idempotent.
    pub fn stop(&self) {
        self.writer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.writer.is_running()
    }

    fn format_line(&self, record: &LogRecord<'_>) -> String {
        format!(
            "{} {}/{} : {}",
            self.config.line_time_format.format_now(),
            record.severity.code(),
            record.tag.unwrap_or(""),
            sanitize_message(record.message),
        )
    }

    #[cfg(test)]
    fn queued_lines(&self) -> usize {
        self.writer.queue_len()
    }
}

impl Sink for FileSink {
    fn record(&self, record: &LogRecord<'_>) {
        if record.severity < self.config.min_severity {
            return;
        }
        // The attached error payload is not part of the persisted line.
        self.writer.enqueue(self.format_line(record));
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Escape line breaks and tabs so one record is always exactly one line in
/// the file.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sink(min_severity: Severity) -> FileSink {
        FileSink::new(FileSinkConfig::new().with_min_severity(min_severity))
            .expect("valid config")
    }

    #[test]
    fn test_below_threshold_has_no_side_effect() {
        let sink = test_sink(Severity::Info);
        sink.record(&LogRecord::new(Severity::Verbose, "ignored"));
        sink.record(&LogRecord::new(Severity::Debug, "ignored"));
        assert_eq!(sink.queued_lines(), 0);
    }

    #[test]
    fn test_at_and_above_threshold_enqueues() {
        let sink = test_sink(Severity::Info);
        sink.record(&LogRecord::new(Severity::Info, "kept"));
        sink.record(&LogRecord::new(Severity::Assert, "kept"));
        assert_eq!(sink.queued_lines(), 2);
    }

    #[test]
    fn test_line_shape() {
        let sink = test_sink(Severity::Verbose);
        let record = LogRecord::new(Severity::Warn, "low disk space").with_tag("storage");
        let line = sink.format_line(&record);

        assert!(line.contains(" W/storage : low disk space"), "line: {}", line);
        // HH:MM:SS.mmm prefix
        let prefix = line.split(' ').next().unwrap();
        assert_eq!(prefix.len(), 12);
        assert_eq!(&prefix[2..3], ":");
    }

    #[test]
    fn test_missing_tag_renders_empty() {
        let sink = test_sink(Severity::Verbose);
        let line = sink.format_line(&LogRecord::new(Severity::Error, "no tag here"));
        assert!(line.contains(" E/ : no tag here"), "line: {}", line);
    }

    #[test]
    fn test_error_payload_not_in_line() {
        let sink = test_sink(Severity::Verbose);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "underlying cause");
        let record = LogRecord::new(Severity::Error, "operation failed")
            .with_tag("io")
            .with_error(&err);

        let line = sink.format_line(&record);
        assert!(!line.contains("underlying cause"));
    }

    #[test]
    fn test_multiline_message_is_one_line() {
        let sink = test_sink(Severity::Verbose);
        let record = LogRecord::new(Severity::Info, "first\nsecond\r\tthird");
        let line = sink.format_line(&record);

        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
        assert!(line.contains("first\\nsecond\\r\\tthird"));
    }
}
