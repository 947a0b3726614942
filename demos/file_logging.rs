//! File logging example
//!
//! Demonstrates the full bridge: console and file sinks side by side, with
//! the file sink persisting records at INFO and above.
//!
//! Run with: cargo run --example file_logging

use applog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let storage = std::env::temp_dir().join("applog_demo");
    let host = DirHost::new(&storage).with_version(env!("CARGO_PKG_VERSION"));

    let registry = SinkRegistry::new();
    let file_sink = FileSink::create(&host, Severity::Info)?;
    registry.install(file_sink.clone());
    registry.install(Arc::new(ConsoleSink::new()));

    registry.info("boot", "application started");
    registry.debug("boot", "this line reaches the console only");

    for i in 1..=5 {
        applog::info!(registry, "worker", "processing item {}/5", i);
        if i == 3 {
            registry.warn("worker", "item 3 took longer than expected");
        }
    }

    // Give the writer a moment to drain, then shut it down. Pending lines
    // are not flushed on stop.
    std::thread::sleep(std::time::Duration::from_millis(100));
    file_sink.stop();

    println!(
        "\nLog files written under {}",
        storage.join("logs").display()
    );
    Ok(())
}
