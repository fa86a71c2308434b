//! Lock-guarded snapshot repository over a single JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use jobnest_models::Snapshot;

use crate::error::{StoreError, StoreResult};

/// Sole gateway to durable state.
///
/// Every mutation runs as one load, mutate, save cycle under an in-process
/// lock, so two requests served by the same process cannot interleave their
/// read-modify-write cycles. Two independent processes sharing the file can
/// still lose the earlier writer's mutation; the store tests pin that
/// behavior down rather than hiding it.
pub struct SnapshotStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SnapshotStore {
    /// Create a store over `path`. The file is not touched until the first
    /// load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full snapshot. A missing file is the empty snapshot; a
    /// malformed file is `StoreError::Corrupt`.
    pub async fn load(&self) -> StoreResult<Snapshot> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Replace the on-disk snapshot. Either fully succeeds or fails with
    /// the prior state intact.
    pub async fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        self.save_unlocked(snapshot).await
    }

    /// Run one load→mutate→save cycle under the store lock.
    ///
    /// If `mutate` fails, nothing is written and its error is returned
    /// unchanged. The save only happens on success, so a rejected request
    /// never dirties the snapshot.
    pub async fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.load_unlocked().await?;
        let value = mutate(&mut snapshot)?;
        self.save_unlocked(&snapshot).await?;
        Ok(value)
    }

    async fn load_unlocked(&self) -> StoreResult<Snapshot> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Snapshot file missing, starting empty");
                Ok(Snapshot::default())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Snapshot read failed");
                Err(StoreError::Io(e))
            }
        }
    }

    async fn save_unlocked(&self, snapshot: &Snapshot) -> StoreResult<()> {
        // Pretty-printed, matching the existing db.json format.
        let json = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
