//! Snapshot persistence
//!
//! Reads and writes the snapshot document at a filesystem path. A missing
//! file is a normal first run; a present-but-malformed file is surfaced as
//! a parse error rather than silently replaced with defaults. Both load
//! and save are one-shot synchronous operations at the session boundary;
//! there is no retry logic anywhere.

use crate::model::Snapshot;
use pickup_common::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes the snapshot at a fixed path
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the prior snapshot.
    ///
    /// Returns `Ok(None)` when the file does not exist (first run).
    /// Returns `Error::SnapshotParse` when the file exists but does not
    /// parse; the caller must skip restoration rather than guess defaults.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting fresh", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = serde_json::from_slice(&bytes)
            .map_err(|e| Error::SnapshotParse(format!("{}: {}", self.path.display(), e)))?;
        info!("Loaded snapshot from {}", self.path.display());
        Ok(Some(snapshot))
    }

    /// Persist the full snapshot, replacing any prior content.
    ///
    /// Writes a sibling temp file and renames it into place, which is
    /// atomic for the single-process single-writer model. Parent
    /// directories are created on demand.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| Error::SnapshotParse(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!("Saved snapshot to {}", self.path.display());
        Ok(())
    }
}
