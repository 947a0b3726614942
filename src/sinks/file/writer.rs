//! Asynchronous file writer
//!
//! Owns the line queue and the single background worker that drains it to
//! disk. Producers enqueue formatted lines without ever blocking; the
//! worker is the only thread that touches the log directory or the open
//! file handle.

use super::config::FileSinkConfig;
use super::housekeeping;
use crate::core::error::{BridgeError, Result};
use crate::core::host::HostEnv;
use chrono::Local;
use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};

struct Worker {
    handle: thread::JoinHandle<()>,
    shutdown_tx: Sender<()>,
    running: Arc<AtomicBool>,
}

/// Queue plus worker-thread lifecycle.
///
/// The queue outlives individual workers: lines enqueued while no worker is
/// active stay buffered and are drained by the next [`FileWriter::start`].
pub struct FileWriter {
    line_tx: Sender<String>,
    line_rx: Receiver<String>,
    worker: Mutex<Option<Worker>>,
}

impl FileWriter {
    #[must_use]
    pub fn new() -> Self {
        let (line_tx, line_rx) = unbounded();
        Self {
            line_tx,
            line_rx,
            worker: Mutex::new(None),
        }
    }

    /// Push a formatted line onto the queue. Never blocks.
    pub(crate) fn enqueue(&self, line: String) {
        // The receiver half lives as long as self, so this cannot fail.
        let _ = self.line_tx.send(line);
    }

    /// Start the background worker, stopping any previous one first.
    ///
    /// Housekeeping runs synchronously on the calling thread before the
    /// worker exists: resolve the app version (best-effort), create the log
    /// directory, prune files past the retention window, pick a fresh file
    /// name and open it for append. Failures to create the directory or
    /// open the file are fatal and propagate; everything else is contained.
    pub fn start(&self, host: &dyn HostEnv, config: &FileSinkConfig) -> Result<()> {
        // Hold the slot for the whole start so concurrent start/stop calls
        // serialize and at most one worker can ever be live.
        let mut slot = self.worker.lock();
        if let Some(worker) = slot.take() {
            shutdown_worker(worker);
        }

        let version = match host.app_version() {
            Ok(version) => version,
            Err(e) => {
                eprintln!("[APPLOG WARNING] Failed to resolve app version: {}", e);
                String::new()
            }
        };

        let dir = host.storage_root().join(&config.log_dir_name);
        fs::create_dir_all(&dir).map_err(|e| {
            BridgeError::io_operation(
                "creating log directory",
                format!("cannot create '{}'", dir.display()),
                e,
            )
        })?;

        let retention = Duration::from_secs(u64::from(config.retention_days) * 24 * 3600);
        let cutoff = SystemTime::now()
            .checked_sub(retention)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        housekeeping::prune_older_than(&dir, cutoff);

        let path = housekeeping::select_log_file(&dir, &version, Local::now());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                BridgeError::file_sink(
                    path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;

        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        let running = Arc::new(AtomicBool::new(true));
        let line_rx = self.line_rx.clone();
        let loop_running = Arc::clone(&running);

        let handle = thread::Builder::new()
            .name("applog-file-writer".to_string())
            .spawn(move || {
                if let Err(e) = drain_loop(file, &line_rx, &shutdown_rx, &loop_running) {
                    eprintln!("[APPLOG ERROR] File writer terminated: {}", e);
                }
            })
            .map_err(|e| {
                BridgeError::io_operation(
                    "spawning writer thread",
                    "cannot start the file writer worker",
                    e,
                )
            })?;

        *slot = Some(Worker {
            handle,
            shutdown_tx,
            running,
        });
        Ok(())
    }

    /// Stop the background worker.
    ///
    /// Signals the worker, unblocking it if it is parked on an empty queue,
    /// and joins it. Lines still queued are left in the queue, not written.
    /// Idempotent: a no-op when no worker is active.
    pub fn stop(&self) {
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            shutdown_worker(worker);
        }
    }

    #[cfg(test)]
    pub(crate) fn queue_len(&self) -> usize {
        self.line_rx.len()
    }

    /// Whether a worker thread is currently alive.
    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Flip the running flag, wake the worker if it is parked on an empty
/// queue, and wait for it to exit.
fn shutdown_worker(worker: Worker) {
    worker.running.store(false, Ordering::SeqCst);
    let _ = worker.shutdown_tx.try_send(());
    if let Err(e) = worker.handle.join() {
        eprintln!("[APPLOG ERROR] File writer thread panicked: {:?}", e);
    }
}

/// The worker loop: block for the next line, append it, flush.
///
/// Exits on the shutdown signal, on queue disconnect, or on the first
/// write/flush error. Write errors are fatal to the worker; there is no
/// retry. The file handle closes when the loop returns.
fn drain_loop(
    file: File,
    lines: &Receiver<String>,
    shutdown: &Receiver<()>,
    running: &AtomicBool,
) -> Result<()> {
    let mut writer = BufWriter::new(file);
    loop {
        select! {
            recv(shutdown) -> _ => break,
            recv(lines) -> line => {
                // A cancelled worker must not drain lines that raced in
                // ahead of the shutdown signal.
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(line) = line else { break };
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
    }
    Ok(())
}
