//! Solace - tier-aware admission control for an AI counseling companion.
//!
//! Solace decides whether a chat request may proceed before the expensive
//! work (invoking a language model) happens: subscription tiers with daily
//! quotas, capability-gated features, and a client-held guest allowance.
//!
//! # Quick Start
//!
//! ```rust
//! use solace::{Action, AdmissionGate, ChatMode, Identity, Tier, TierRegistry, UsageCounter};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gate = AdmissionGate::new(TierRegistry::builtin(), UsageCounter::new());
//!
//!     let caller = Identity::user("user-42", Tier::Free);
//!     let decision = gate.can_proceed(&caller, Action::Chat(ChatMode::Standard)).await;
//!     assert!(decision.is_allowed());
//! }
//! ```
//!
//! # Architecture
//!
//! Solace is organized as a workspace with focused crates:
//!
//! - `solace_core` - Core data types (Tier, Limit, Admission, ...)
//! - `solace_error` - Error types
//! - `solace_quota` - Configuration, tier registry, usage counter, admission gate
//! - `solace_guest` - Client-held guest session tracker
//!
//! This crate (`solace`) re-exports everything for convenience.

pub use solace_core::*;
pub use solace_error::*;
pub use solace_guest::*;
pub use solace_quota::*;

pub mod telemetry;
