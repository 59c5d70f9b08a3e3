//! Common error types for pickup

use thiserror::Error;

/// Common result type for pickup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the pickup crates
///
/// A missing state file is deliberately not represented here: first run
/// is expected and is reported as `Ok(None)` by the snapshot store.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// State file exists but does not parse as the persisted format.
    /// Surfaced to the caller instead of being swallowed into defaults,
    /// so a corrupt-but-recoverable file is never silently discarded.
    #[error("Snapshot parse error: {0}")]
    SnapshotParse(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
