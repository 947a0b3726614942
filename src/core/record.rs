//! Log record structure

use super::severity::Severity;
use std::error::Error;

/// A single log call, borrowed from the caller.
///
/// Records are created on every log call, handed to the installed sinks and
/// consumed immediately. They are never stored, so all fields borrow from
/// the call site.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub tag: Option<&'a str>,
    pub message: &'a str,
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    pub fn new(severity: Severity, message: &'a str) -> Self {
        Self {
            severity,
            tag: None,
            message,
            error: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let record = LogRecord::new(Severity::Error, "failed")
            .with_tag("net")
            .with_error(&err);

        assert_eq!(record.severity, Severity::Error);
        assert_eq!(record.tag, Some("net"));
        assert_eq!(record.message, "failed");
        assert!(record.error.is_some());
    }

    #[test]
    fn test_defaults() {
        let record = LogRecord::new(Severity::Info, "hello");
        assert!(record.tag.is_none());
        assert!(record.error.is_none());
    }
}
