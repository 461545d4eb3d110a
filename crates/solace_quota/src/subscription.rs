//! Durable subscription profiles.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solace_core::Tier;
use solace_error::SolaceResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cross-session subscription state for one user.
///
/// The in-memory counter is the fast path; this record is what an embedding
/// application reconciles it against across restarts. The reconciliation
/// policy itself belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    /// Subscription tier.
    pub tier: Tier,
    /// Requests consumed in the current day.
    pub daily_used: u32,
    /// Start of the day the `daily_used` count belongs to.
    pub last_reset_date: DateTime<Utc>,
}

/// Trait for pluggable subscription-profile backends.
///
/// A horizontally scaled deployment attaches its shared store here; the
/// usage counter itself stays single-process.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Load the subscription for a user, if one exists.
    async fn load(&self, user_id: &str) -> SolaceResult<Option<UserSubscription>>;

    /// Persist the subscription for a user.
    async fn save(&self, user_id: &str, subscription: &UserSubscription) -> SolaceResult<()>;
}

/// In-memory store for tests and single-process deployments.
#[derive(Debug, Clone, Default)]
pub struct MemorySubscriptionStore {
    profiles: Arc<RwLock<HashMap<String, UserSubscription>>>,
}

impl MemorySubscriptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for MemorySubscriptionStore {
    async fn load(&self, user_id: &str) -> SolaceResult<Option<UserSubscription>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, subscription: &UserSubscription) -> SolaceResult<()> {
        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), subscription.clone());
        Ok(())
    }
}
