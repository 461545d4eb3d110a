//! Admission gate combining tier lookup, capability gating, and the counter.

use crate::{TierRegistry, UsageCounter};
use chrono::{DateTime, Duration, Utc};
use solace_core::{Action, Admission, Identity, Limit, QuotaStatus};
use tracing::{debug, instrument};

/// Decision service consulted before performing the expensive action.
///
/// Resolution order: capability gate first (independent of quota), unlimited
/// bypass second (no bookkeeping), then the usage counter keyed by the
/// identity. On a quota denial the caller surfaces `reset_at` as the
/// retry-after hint; on a capability denial it prompts an upgrade instead.
///
/// Construct one gate at process start and inject it into request handlers.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    registry: TierRegistry,
    counter: UsageCounter,
    window: Duration,
}

impl AdmissionGate {
    /// Create a gate over a registry and counter with a 24-hour quota window.
    pub fn new(registry: TierRegistry, counter: UsageCounter) -> Self {
        Self {
            registry,
            counter,
            window: Duration::seconds(86_400),
        }
    }

    /// Override the quota window.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// The registry this gate resolves tiers against.
    pub fn registry(&self) -> &TierRegistry {
        &self.registry
    }

    /// The counter backing this gate.
    pub fn counter(&self) -> &UsageCounter {
        &self.counter
    }

    /// Decide whether `identity` may perform `action` right now.
    pub async fn can_proceed(&self, identity: &Identity, action: Action) -> Admission {
        self.can_proceed_at(identity, action, Utc::now()).await
    }

    /// Decide at a caller-supplied instant.
    #[instrument(
        skip(self, identity, now),
        fields(tier = %identity.tier(), action = %action)
    )]
    pub async fn can_proceed_at(
        &self,
        identity: &Identity,
        action: Action,
        now: DateTime<Utc>,
    ) -> Admission {
        let tier = identity.tier();
        let definition = self.registry.lookup(tier);

        if !definition.permits(&action) {
            debug!("Capability denied");
            return Admission::CapabilityDenied { tier, action };
        }

        match *definition.daily_limit() {
            // Unlimited tiers bypass the counter entirely: no bookkeeping.
            Limit::Unlimited => Admission::Allowed(QuotaStatus::new(
                Limit::Unlimited,
                u32::MAX,
                now + self.window,
            )),
            Limit::Limited(limit) => {
                self.counter
                    .check_at(&identity.quota_key(), limit, self.window, now)
                    .await
            }
        }
    }
}
