//! Startup housekeeping for the file writer
//!
//! Runs once per writer start, before the background loop exists: prune
//! files past the retention window and pick a fresh file name for this
//! session.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Timestamp pattern embedded in log file names.
pub(crate) const FILE_NAME_TIME_FORMAT: &str = "%Y_%m_%d_%H_%M";

/// Collect every regular file under `dir`, descending into subdirectories.
/// Unreadable entries are skipped.
fn collect_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let Ok(entries) = fs::read_dir(&current) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }

    files
}

/// Delete every file under `dir` whose last-modified time is strictly
/// before `cutoff`.
///
/// Per-file failures (missing metadata, delete errors) are reported and
/// skipped; one bad file never stops the sweep.
pub(crate) fn prune_older_than(dir: &Path, cutoff: SystemTime) {
    for path in collect_files(dir) {
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        if modified < cutoff {
            if let Err(e) = fs::remove_file(&path) {
                eprintln!(
                    "[APPLOG WARNING] Failed to prune old log file {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }
}

/// Pick the log file path for a session starting at `now`.
///
/// The index-less name `{version}_{stamp}.txt` is tried first, then `_1`,
/// `_2`, ... until a name not yet on disk is found, so two sessions started
/// within the same minute get distinct files.
pub(crate) fn select_log_file(dir: &Path, version: &str, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format(FILE_NAME_TIME_FORMAT).to_string();
    let mut index = 0u32;
    loop {
        let name = if index == 0 {
            format!("{}_{}.txt", version, stamp)
        } else {
            format!("{}_{}_{}.txt", version, stamp, index)
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}
