//! Subscription tier enumeration.

use serde::{Deserialize, Serialize};

/// A named subscription level determining quota and feature access.
///
/// The set is closed: every identity resolves to exactly one of these four
/// tiers, with unauthenticated callers mapping to [`Tier::Guest`]. A tier
/// name that does not parse is a configuration error, never silently treated
/// as guest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tier {
    /// Unauthenticated visitor, tracked client-side with a small lifetime
    /// allowance.
    Guest,
    /// Signed-up account with no paid subscription.
    Free,
    /// Entry paid subscription.
    Basic,
    /// Full-access paid subscription with no daily quota.
    Premium,
}

impl Tier {
    /// True for tiers that require an authenticated account.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Tier::Guest)
    }
}
