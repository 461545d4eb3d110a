//! In-memory fixed-window usage counter.

use chrono::{DateTime, Duration, Utc};
use solace_core::{Admission, Limit, QuotaStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Usage state for one identifier's current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageRecord {
    /// Requests counted in the current window.
    pub count: u32,
    /// When the current window resets.
    pub reset_at: DateTime<Utc>,
}

impl UsageRecord {
    fn expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.reset_at
    }
}

/// Per-identity request counter with fixed-window reset semantics.
///
/// Records live in process memory behind a write lock, so read-check-increment
/// is atomic per call and a denied request never consumes quota. Expired
/// windows are replaced lazily on access; the periodic [`sweep`] only bounds
/// memory growth and never changes a decision.
///
/// The counter is single-process state: it does not provide a shared quota
/// across horizontally scaled instances. Construct one per process and inject
/// it into handlers rather than reaching for a global.
///
/// Every time-dependent operation has an `*_at` variant taking an explicit
/// instant, used by tests and embedding simulations that control the clock.
///
/// [`sweep`]: UsageCounter::sweep
#[derive(Debug, Clone, Default)]
pub struct UsageCounter {
    windows: Arc<RwLock<HashMap<String, UsageRecord>>>,
}

impl UsageCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and consume one request against `limit` for `key`.
    ///
    /// Equivalent to [`check_at`](Self::check_at) at the current time.
    pub async fn check(&self, key: &str, limit: u32, window: Duration) -> Admission {
        self.check_at(key, limit, window, Utc::now()).await
    }

    /// Check and consume one request, with the caller supplying the clock.
    ///
    /// - A fresh or expired identifier starts a new window ending at
    ///   `now + window`.
    /// - At or over the limit the request is denied without incrementing,
    ///   and the stored `reset_at` is preserved as the retry-after hint.
    /// - Otherwise the count advances by one.
    #[instrument(skip(self, window, now))]
    pub async fn check_at(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Admission {
        let mut windows = self.windows.write().await;

        let record = windows.entry(key.to_string()).or_insert(UsageRecord {
            count: 0,
            reset_at: now + window,
        });

        if record.expired(now) {
            record.count = 0;
            record.reset_at = now + window;
        }

        if record.count >= limit {
            debug!(count = record.count, limit, "Quota exhausted");
            return Admission::QuotaExhausted(QuotaStatus::new(
                Limit::Limited(limit),
                0,
                record.reset_at,
            ));
        }

        record.count += 1;
        let remaining = limit.saturating_sub(record.count);

        Admission::Allowed(QuotaStatus::new(
            Limit::Limited(limit),
            remaining,
            record.reset_at,
        ))
    }

    /// Snapshot the current window without consuming a request.
    ///
    /// Useful for displaying quota information to users.
    pub async fn status(&self, key: &str, limit: u32, window: Duration) -> QuotaStatus {
        self.status_at(key, limit, window, Utc::now()).await
    }

    /// Snapshot at a caller-supplied instant.
    pub async fn status_at(
        &self,
        key: &str,
        limit: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> QuotaStatus {
        let windows = self.windows.read().await;

        let (count, reset_at) = windows
            .get(key)
            .filter(|record| !record.expired(now))
            .map(|record| (record.count, record.reset_at))
            .unwrap_or((0, now + window));

        QuotaStatus::new(Limit::Limited(limit), limit.saturating_sub(count), reset_at)
    }

    /// Clear one identifier's window, restoring its full quota.
    pub async fn reset(&self, key: &str) {
        let mut windows = self.windows.write().await;
        windows.remove(key);
    }

    /// Remove expired records.
    ///
    /// Equivalent to [`sweep_at`](Self::sweep_at) at the current time.
    pub async fn sweep(&self) -> usize {
        self.sweep_at(Utc::now()).await
    }

    /// Remove records whose window has passed, as of `now`.
    ///
    /// Best-effort memory bound only: expired records are also replaced
    /// lazily on access, so a missed sweep never changes a decision. Returns
    /// the number of records removed.
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        let mut windows = self.windows.write().await;
        let before = windows.len();

        windows.retain(|_, record| !record.expired(now));

        let removed = before - windows.len();
        if removed > 0 {
            info!(removed, remaining = windows.len(), "Swept expired usage records");
        }
        removed
    }

    /// Spawn the periodic sweep task.
    ///
    /// The returned handle owns the loop; abort or drop it at shutdown.
    pub fn spawn_sweeper(&self, every: std::time::Duration) -> tokio::task::JoinHandle<()> {
        let counter = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                counter.sweep().await;
            }
        })
    }

    /// Number of identifiers currently tracked.
    pub async fn len(&self) -> usize {
        self.windows.read().await.len()
    }

    /// True when no identifiers are tracked.
    pub async fn is_empty(&self) -> bool {
        self.windows.read().await.is_empty()
    }
}
