//! # Applog
//!
//! An application logging bridge: routes records from a logging facade into
//! an ordered set of sinks, and persists a severity-filtered subset of
//! lines to rotating files on local storage.
//!
//! ## Features
//!
//! - **Non-blocking ingestion**: callers never touch the disk; a dedicated
//!   worker thread drains a FIFO queue
//! - **Rotation and retention**: one file per session, named by app version
//!   and timestamp; files past the retention window are pruned at startup
//! - **Explicit composition**: sinks are installed into a registry passed
//!   around explicitly, not a process-wide singleton
//! - **Thread Safe**: any number of producer threads, strict FIFO order on
//!   disk

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BridgeError, DirHost, HostEnv, LogRecord, Result, Severity, Sink, SinkRegistry,
        TimeFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, FileSinkConfig};
}

pub use crate::core::{
    BridgeError, DirHost, HostEnv, LogRecord, Result, Severity, Sink, SinkRegistry, TimeFormat,
};
pub use crate::sinks::{ConsoleSink, FileSink, FileSinkConfig, FileWriter};
