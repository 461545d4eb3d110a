//! Client-held guest session tracking.
//!
//! Unauthenticated visitors get a small lifetime message allowance tracked on
//! the client. The count survives restarts through a pluggable store and only
//! ever decreases via an explicit reset on sign-up conversion. Unlike the
//! server-side tiers there is no time window: a guest who hits the limit
//! stays there until they convert.

mod file;
mod memory;
mod store;
mod tracker;

pub use file::FileGuestStore;
pub use memory::MemoryGuestStore;
pub use store::{GuestState, GuestStateStore};
pub use tracker::{DEFAULT_GUEST_LIMIT, GuestPhase, GuestTracker};
