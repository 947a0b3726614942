//! Basic usage example
//!
//! Demonstrates installing sinks into a registry and logging through it.
//!
//! Run with: cargo run --example basic_usage

use applog::prelude::*;
use std::sync::Arc;

fn main() {
    // The registry is the composition root's object; pass it to whatever
    // needs to log.
    let registry = SinkRegistry::new();
    registry.install(Arc::new(ConsoleSink::new()));

    registry.info("boot", "application started");
    registry.debug("boot", "loading configuration");
    registry.warn("config", "using default settings for some options");

    // Records can carry an error payload; the console sink prints its
    // source chain.
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml not found");
    registry.record(
        Severity::Error,
        Some("config"),
        "failed to load settings",
        Some(&err),
    );

    // Formatting macros delegate to the registry.
    let items = 5;
    applog::info!(registry, "worker", "processing {} items", items);
}
