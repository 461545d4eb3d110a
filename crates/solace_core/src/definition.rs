//! Per-tier quota and capability definitions.

use crate::{Action, ChatMode, Limit, Tier};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable quota and capability record for one subscription tier.
///
/// Defined once at process start by the tier registry and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TierDefinition {
    /// The tier these limits apply to.
    tier: Tier,
    /// Daily request allowance.
    daily_limit: Limit,
    /// Model identifier this tier's conversations run on.
    allowed_model: String,
    /// Whether session analysis reports are available.
    can_access_analysis: bool,
    /// Whether non-standard counseling modes are available.
    can_access_all_modes: bool,
    /// Monthly price in cents, if the tier is paid.
    price_cents: Option<u32>,
}

impl TierDefinition {
    /// Create a new tier definition.
    pub fn new(
        tier: Tier,
        daily_limit: Limit,
        allowed_model: impl Into<String>,
        can_access_analysis: bool,
        can_access_all_modes: bool,
        price_cents: Option<u32>,
    ) -> Self {
        Self {
            tier,
            daily_limit,
            allowed_model: allowed_model.into(),
            can_access_analysis,
            can_access_all_modes,
            price_cents,
        }
    }

    /// Whether this tier may perform the requested action.
    ///
    /// Capability gating is independent of quota: a `false` here means the
    /// caller should be offered an upgrade, not a retry-after.
    pub fn permits(&self, action: &Action) -> bool {
        match action {
            Action::Chat(mode) => *mode == ChatMode::Standard || self.can_access_all_modes,
            Action::Analysis => self.can_access_analysis,
        }
    }
}
