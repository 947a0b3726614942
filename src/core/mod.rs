//! Core bridge types and traits

pub mod error;
pub mod host;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{BridgeError, Result};
pub use host::{DirHost, HostEnv};
pub use record::LogRecord;
pub use registry::SinkRegistry;
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::TimeFormat;
