//! Guest state storage trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solace_error::SolaceResult;

/// Persisted guest session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuestState {
    /// Messages sent so far by this guest session.
    pub count: u32,
}

/// Trait for pluggable guest-state backends.
///
/// Implementations are a durable small-state client cache: state survives
/// reloads but is scoped to one device.
#[async_trait]
pub trait GuestStateStore: Send + Sync {
    /// Load the persisted state, if any.
    async fn load(&self) -> SolaceResult<Option<GuestState>>;

    /// Persist the state.
    async fn save(&self, state: &GuestState) -> SolaceResult<()>;

    /// Remove any persisted state.
    async fn clear(&self) -> SolaceResult<()>;
}
