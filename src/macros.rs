//! Logging macros for ergonomic log message formatting.
//!
//! # Examples
//!
//! ```
//! use applog::prelude::*;
//! use applog::info;
//!
//! let registry = SinkRegistry::new();
//!
//! // Basic logging
//! info!(registry, "boot", "server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(registry, "net", "listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use applog::prelude::*;
/// # let registry = SinkRegistry::new();
/// use applog::log;
/// log!(registry, Severity::Info, "boot", "simple message");
/// log!(registry, Severity::Error, "http", "status: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($registry:expr, $severity:expr, $tag:expr, $($arg:tt)+) => {
        $registry.record($severity, Some($tag), &format!($($arg)+), None)
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::core::Severity::Verbose, $tag, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::core::Severity::Debug, $tag, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::core::Severity::Info, $tag, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::core::Severity::Warn, $tag, $($arg)+)
    };
}

/// Log an error-level message.
///
/// There is no macro for the `Assert` level, which would shadow
/// `std::assert!`; use [`log!`] or `SinkRegistry::assert` instead.
#[macro_export]
macro_rules! error {
    ($registry:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::core::Severity::Error, $tag, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Severity, SinkRegistry};

    #[test]
    fn test_log_macro() {
        let registry = SinkRegistry::new();
        log!(registry, Severity::Info, "test", "plain message");
        log!(registry, Severity::Info, "test", "formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let registry = SinkRegistry::new();
        verbose!(registry, "test", "verbose message");
        debug!(registry, "test", "count: {}", 5);
        info!(registry, "test", "items: {}", 100);
        warn!(registry, "test", "retry {} of {}", 1, 3);
        error!(registry, "test", "code: {}", 500);
    }
}
