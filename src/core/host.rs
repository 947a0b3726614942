//! Host environment seam
//!
//! The bridge needs two things from its host: a writable storage root and a
//! best-effort application version string. Abstracting them behind a trait
//! keeps the file sink testable and keeps platform lookup code out of the
//! core.

use super::error::Result;
use std::path::PathBuf;

pub trait HostEnv: Send + Sync {
    /// Root of the app-private external storage area. Log directories are
    /// created beneath it.
    fn storage_root(&self) -> PathBuf;

    /// Version string from the host's package metadata.
    ///
    /// Best-effort: callers fall back to an empty string when this fails,
    /// so an error here must never abort startup.
    fn app_version(&self) -> Result<String>;
}

/// Plain-directory host: a storage root and an optional, statically known
/// version string.
pub struct DirHost {
    root: PathBuf,
    version: Option<String>,
}

impl DirHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl HostEnv for DirHost {
    fn storage_root(&self) -> PathBuf {
        self.root.clone()
    }

    fn app_version(&self) -> Result<String> {
        self.version
            .clone()
            .ok_or_else(|| super::error::BridgeError::version_unavailable("no version configured"))
    }
}
