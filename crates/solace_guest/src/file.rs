//! File-backed guest state store.

use crate::{GuestState, GuestStateStore};
use async_trait::async_trait;
use solace_error::{SolaceResult, StoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON-file store under a fixed key on the local device.
///
/// The durability layer for guest sessions: state survives process restarts
/// but is scoped to one machine.
#[derive(Debug, Clone)]
pub struct FileGuestStore {
    path: PathBuf,
}

impl FileGuestStore {
    /// Create a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location
    /// (`<data dir>/solace/guest_session.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform exposes no user data directory.
    pub fn at_default_path() -> SolaceResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::new("No platform data directory available"))?;
        Ok(Self::new(base.join("solace").join("guest_session.json")))
    }

    /// Path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GuestStateStore for FileGuestStore {
    async fn load(&self) -> SolaceResult<Option<GuestState>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let state = serde_json::from_slice(&bytes).map_err(|e| {
                    StoreError::new(format!(
                        "Corrupt guest state at {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
                Ok(Some(state))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::new(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
            .into()),
        }
    }

    async fn save(&self, state: &GuestState) -> SolaceResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::new(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let bytes = serde_json::to_vec(state)
            .map_err(|e| StoreError::new(format!("Failed to encode guest state: {}", e)))?;

        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            StoreError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = state.count, "Guest state saved");
        Ok(())
    }

    async fn clear(&self) -> SolaceResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::new(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))
            .into()),
        }
    }
}
