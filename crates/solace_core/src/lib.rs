//! Core data types for the Solace admission library.
//!
//! This crate provides the foundation data types used across the Solace
//! workspace: subscription tiers, quota limits, capability-gated actions,
//! caller identities, and admission decisions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod decision;
mod definition;
mod identity;
mod limit;
mod tier;

pub use action::{Action, ChatMode};
pub use decision::{Admission, QuotaStatus};
pub use definition::TierDefinition;
pub use identity::Identity;
pub use limit::Limit;
pub use tier::Tier;
