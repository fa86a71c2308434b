//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or saving the snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but is not a well-formed snapshot document.
    #[error("Snapshot data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Reading or replacing the backing file failed. The prior on-disk
    /// state is presumed unchanged.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
