//! Guest session state machine.

use crate::{GuestState, GuestStateStore};
use solace_error::SolaceResult;
use tracing::{debug, info, instrument};

/// Default lifetime message allowance for guests.
pub const DEFAULT_GUEST_LIMIT: u32 = 3;

/// Where a guest session stands against its allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GuestPhase {
    /// No messages sent yet.
    Fresh,
    /// Some allowance used, some remaining.
    Counting,
    /// Allowance exhausted; only a reset (sign-up) leaves this phase.
    LimitReached,
}

/// Client-held counter for unauthenticated sessions.
///
/// The count moves Fresh -> Counting -> LimitReached monotonically and is
/// persisted through the store on every step. There is no time window:
/// `LimitReached` never expires on its own; only [`reset`] (fired on
/// successful authentication) returns to `Fresh` and clears persisted state.
///
/// [`reset`]: GuestTracker::reset
#[derive(Debug)]
pub struct GuestTracker<S: GuestStateStore> {
    store: S,
    limit: u32,
    count: u32,
}

impl<S: GuestStateStore> GuestTracker<S> {
    /// Load a tracker over `store` with the given allowance.
    ///
    /// Picks up a persisted count from a previous run, if any.
    pub async fn load(store: S, limit: u32) -> SolaceResult<Self> {
        let count = store.load().await?.map(|state| state.count).unwrap_or(0);
        debug!(count, limit, "Guest tracker loaded");
        Ok(Self {
            store,
            limit,
            count,
        })
    }

    /// Load a tracker with the default allowance.
    pub async fn with_default_limit(store: S) -> SolaceResult<Self> {
        Self::load(store, DEFAULT_GUEST_LIMIT).await
    }

    /// Messages sent so far.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The lifetime allowance.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Current phase of the session.
    pub fn phase(&self) -> GuestPhase {
        if self.count >= self.limit {
            GuestPhase::LimitReached
        } else if self.count == 0 {
            GuestPhase::Fresh
        } else {
            GuestPhase::Counting
        }
    }

    /// True once the allowance is exhausted.
    pub fn limit_reached(&self) -> bool {
        self.count >= self.limit
    }

    /// Record one message and persist the new count.
    ///
    /// Once the limit is reached the count stops advancing; the phase stays
    /// `LimitReached` until [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub async fn increment(&mut self) -> SolaceResult<GuestPhase> {
        if !self.limit_reached() {
            self.count += 1;
            self.store.save(&GuestState { count: self.count }).await?;
        }
        let phase = self.phase();
        debug!(count = self.count, %phase, "Guest message recorded");
        Ok(phase)
    }

    /// Clear the session on successful sign-up conversion.
    #[instrument(skip(self))]
    pub async fn reset(&mut self) -> SolaceResult<()> {
        self.store.clear().await?;
        self.count = 0;
        info!("Guest session reset after conversion");
        Ok(())
    }
}
