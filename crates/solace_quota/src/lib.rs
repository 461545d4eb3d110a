//! Tier-based admission control for the Solace counseling service.
//!
//! This crate provides the server-side quota enforcement core: layered TOML
//! configuration, a total tier registry, an in-memory fixed-window usage
//! counter with a background sweep, and the admission gate that combines
//! them. The gate is consulted by the chat-submission handler before the
//! expensive action (invoking a language model) is performed.

mod admission;
mod config;
mod counter;
mod registry;
mod subscription;

pub use admission::AdmissionGate;
pub use config::{GuestSettings, QuotaSettings, SolaceConfig, TierEntry};
pub use counter::{UsageCounter, UsageRecord};
pub use registry::TierRegistry;
pub use subscription::{MemorySubscriptionStore, SubscriptionStore, UserSubscription};
