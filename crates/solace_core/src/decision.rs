//! Admission decisions.

use crate::{Action, Limit, Tier};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Quota metadata attached to an admission decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct QuotaStatus {
    /// The allowance in force for the caller's tier.
    limit: Limit,
    /// Requests left in the current window.
    ///
    /// Not meaningful when `limit` is [`Limit::Unlimited`]; formatters must
    /// branch on the limit before rendering this value.
    remaining: u32,
    /// When the current window resets.
    reset_at: DateTime<Utc>,
}

impl QuotaStatus {
    /// Create a new quota status.
    pub fn new(limit: Limit, remaining: u32, reset_at: DateTime<Utc>) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }
}

/// The verdict returned for each admission check.
///
/// Quota exhaustion and missing capabilities are normal control flow, not
/// errors. Both deny the request but call for different client responses:
/// wait until `reset_at`, versus prompt an upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Admission {
    /// Request admitted; the quota, if any, is already consumed.
    Allowed(QuotaStatus),
    /// Daily quota exhausted; retry once `reset_at` has passed.
    QuotaExhausted(QuotaStatus),
    /// The tier lacks the capability the action requires.
    CapabilityDenied {
        /// Tier that was checked.
        tier: Tier,
        /// Action that was refused.
        action: Action,
    },
}

impl Admission {
    /// True when the request was admitted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed(_))
    }

    /// True when the request was refused, for either reason.
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// Quota metadata, when the decision involved the counter.
    pub fn status(&self) -> Option<&QuotaStatus> {
        match self {
            Admission::Allowed(status) | Admission::QuotaExhausted(status) => Some(status),
            Admission::CapabilityDenied { .. } => None,
        }
    }

    /// Reset timestamp to surface as a retry-after hint.
    ///
    /// Present only for quota exhaustion; a capability denial has nothing to
    /// wait for.
    pub fn retry_after(&self) -> Option<DateTime<Utc>> {
        match self {
            Admission::QuotaExhausted(status) => Some(*status.reset_at()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatMode;

    fn status() -> QuotaStatus {
        QuotaStatus::new(Limit::Limited(20), 5, Utc::now())
    }

    #[test]
    fn allowed_is_allowed() {
        let decision = Admission::Allowed(status());
        assert!(decision.is_allowed());
        assert!(!decision.is_denied());
        assert!(decision.retry_after().is_none());
    }

    #[test]
    fn quota_exhaustion_carries_retry_hint() {
        let status = status();
        let reset_at = *status.reset_at();
        let decision = Admission::QuotaExhausted(status);
        assert!(decision.is_denied());
        assert_eq!(decision.retry_after(), Some(reset_at));
    }

    #[test]
    fn capability_denial_has_no_quota_status() {
        let decision = Admission::CapabilityDenied {
            tier: Tier::Free,
            action: Action::Chat(ChatMode::Coaching),
        };
        assert!(decision.is_denied());
        assert!(decision.status().is_none());
        assert!(decision.retry_after().is_none());
    }
}
