//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::{FileSink, FileSinkConfig, FileWriter};

// Re-export the trait for convenience
pub use crate::core::Sink;
