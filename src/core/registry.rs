//! Sink registry: the composition root's set of active logging backends

use super::record::LogRecord;
use super::severity::Severity;
use super::sink::Sink;
use parking_lot::RwLock;
use std::error::Error;
use std::sync::Arc;

/// Ordered set of active sinks.
///
/// The registry is the single inbound surface of the bridge: adapters call
/// [`SinkRegistry::record`] and every installed sink receives the record in
/// installation order. The registry is passed explicitly to whatever needs
/// to log; there is no process-wide instance.
///
/// # Example
///
/// ```
/// use applog::prelude::*;
/// use std::sync::Arc;
///
/// let registry = SinkRegistry::new();
/// registry.install(Arc::new(ConsoleSink::new()));
/// registry.info("boot", "application started");
/// ```
pub struct SinkRegistry {
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl SinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Append a sink to the dispatch order.
    pub fn install(&self, sink: Arc<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Remove every sink with the given name. Returns true if any was
    /// removed.
    pub fn uninstall(&self, name: &str) -> bool {
        let mut sinks = self.sinks.write();
        let before = sinks.len();
        sinks.retain(|sink| sink.name() != name);
        sinks.len() != before
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// The sole entry point for the facade side: build a record and hand it
    /// to every installed sink.
    pub fn record(
        &self,
        severity: Severity,
        tag: Option<&str>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let record = LogRecord {
            severity,
            tag,
            message,
            error,
        };
        self.dispatch(&record);
    }

    /// Dispatch an already-built record to every installed sink in order.
    ///
    /// **Per-sink panic isolation**: each sink call is wrapped in
    /// `catch_unwind` so one failing sink never prevents the others from
    /// receiving the record.
    pub fn dispatch(&self, record: &LogRecord<'_>) {
        let sinks = self.sinks.read();
        for sink in sinks.iter() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.record(record);
            }));
            if let Err(panic_info) = result {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[APPLOG CRITICAL] Sink '{}' panicked: {}. \
                     Other sinks continue to function.",
                    sink.name(),
                    panic_msg
                );
            }
        }
    }

    #[inline]
    pub fn verbose(&self, tag: &str, message: &str) {
        self.record(Severity::Verbose, Some(tag), message, None);
    }

    #[inline]
    pub fn debug(&self, tag: &str, message: &str) {
        self.record(Severity::Debug, Some(tag), message, None);
    }

    #[inline]
    pub fn info(&self, tag: &str, message: &str) {
        self.record(Severity::Info, Some(tag), message, None);
    }

    #[inline]
    pub fn warn(&self, tag: &str, message: &str) {
        self.record(Severity::Warn, Some(tag), message, None);
    }

    #[inline]
    pub fn error(&self, tag: &str, message: &str) {
        self.record(Severity::Error, Some(tag), message, None);
    }

    #[inline]
    pub fn assert(&self, tag: &str, message: &str) {
        self.record(Severity::Assert, Some(tag), message, None);
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        name: &'static str,
        count: AtomicUsize,
    }

    impl CountingSink {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                count: AtomicUsize::new(0),
            })
        }
    }

    impl Sink for CountingSink {
        fn record(&self, _record: &LogRecord<'_>) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    struct PanickingSink;

    impl Sink for PanickingSink {
        fn record(&self, _record: &LogRecord<'_>) {
            panic!("sink failure");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_dispatch_reaches_all_sinks() {
        let registry = SinkRegistry::new();
        let a = CountingSink::new("a");
        let b = CountingSink::new("b");
        registry.install(a.clone());
        registry.install(b.clone());

        registry.info("test", "hello");
        registry.warn("test", "world");

        assert_eq!(a.count.load(Ordering::Relaxed), 2);
        assert_eq!(b.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_uninstall_by_name() {
        let registry = SinkRegistry::new();
        let a = CountingSink::new("a");
        registry.install(a.clone());
        assert_eq!(registry.sink_count(), 1);

        assert!(registry.uninstall("a"));
        assert!(!registry.uninstall("a"));
        assert_eq!(registry.sink_count(), 0);

        registry.info("test", "dropped");
        assert_eq!(a.count.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_panicking_sink_does_not_poison_dispatch() {
        let registry = SinkRegistry::new();
        let counting = CountingSink::new("counting");
        registry.install(Arc::new(PanickingSink));
        registry.install(counting.clone());

        registry.error("test", "boom");

        assert_eq!(counting.count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_record_with_error_payload() {
        let registry = SinkRegistry::new();
        let counting = CountingSink::new("counting");
        registry.install(counting.clone());

        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        registry.record(Severity::Error, Some("io"), "write failed", Some(&err));

        assert_eq!(counting.count.load(Ordering::Relaxed), 1);
    }
}
