//! In-memory guest state store.

use crate::{GuestState, GuestStateStore};
use async_trait::async_trait;
use solace_error::SolaceResult;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Ephemeral store for tests and short-lived sessions.
///
/// Clones share state, so a tracker reload over a clone sees the same count.
#[derive(Debug, Clone, Default)]
pub struct MemoryGuestStore {
    state: Arc<Mutex<Option<GuestState>>>,
}

impl MemoryGuestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestStateStore for MemoryGuestStore {
    async fn load(&self) -> SolaceResult<Option<GuestState>> {
        Ok(*self.state.lock().await)
    }

    async fn save(&self, state: &GuestState) -> SolaceResult<()> {
        *self.state.lock().await = Some(*state);
        Ok(())
    }

    async fn clear(&self) -> SolaceResult<()> {
        *self.state.lock().await = None;
        Ok(())
    }
}
