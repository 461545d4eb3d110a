//! Total tier-to-definition lookup.

use crate::SolaceConfig;
use solace_core::{Limit, Tier, TierDefinition};
use solace_error::{ConfigError, SolaceError, SolaceErrorKind, SolaceResult};
use std::str::FromStr;
use tracing::debug;

/// Static mapping from subscription tier to quota and capability limits.
///
/// One definition per tier lives in a named field, so [`lookup`] is a total
/// function over the closed tier set with no failure path. The registry is
/// built at process start and never mutated.
///
/// [`lookup`]: TierRegistry::lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRegistry {
    guest: TierDefinition,
    free: TierDefinition,
    basic: TierDefinition,
    premium: TierDefinition,
}

impl TierRegistry {
    /// The built-in tier table.
    ///
    /// | Tier | Daily | Analysis | All modes | Model |
    /// |------|-------|----------|-----------|-------|
    /// | Guest | 3 | No | No | companion-lite |
    /// | Free | 20 | No | No | companion-lite |
    /// | Basic | 100 | Yes | Yes | companion-standard |
    /// | Premium | Unlimited | Yes | Yes | companion-pro |
    pub fn builtin() -> Self {
        Self {
            guest: TierDefinition::new(
                Tier::Guest,
                Limit::Limited(3),
                "companion-lite",
                false,
                false,
                None,
            ),
            free: TierDefinition::new(
                Tier::Free,
                Limit::Limited(20),
                "companion-lite",
                false,
                false,
                None,
            ),
            basic: TierDefinition::new(
                Tier::Basic,
                Limit::Limited(100),
                "companion-standard",
                true,
                true,
                Some(900),
            ),
            premium: TierDefinition::new(
                Tier::Premium,
                Limit::Unlimited,
                "companion-pro",
                true,
                true,
                Some(1900),
            ),
        }
    }

    /// Build a registry from a loaded configuration.
    ///
    /// Every name in the `[tiers]` table must parse as a known tier, and all
    /// four tiers must be present. Violations are hard configuration errors,
    /// never silently downgraded to guest.
    pub fn from_config(config: &SolaceConfig) -> SolaceResult<Self> {
        for name in config.tiers.keys() {
            if Tier::from_str(name).is_err() {
                return Err(SolaceError::new(SolaceErrorKind::InvalidTier(name.clone())));
            }
        }

        let entry_for = |tier: Tier| -> SolaceResult<TierDefinition> {
            config
                .tier_entry(tier)
                .cloned()
                .map(|entry| entry.into_definition(tier))
                .ok_or_else(|| {
                    ConfigError::new(format!("Missing [tiers.{}] entry", tier)).into()
                })
        };

        let registry = Self {
            guest: entry_for(Tier::Guest)?,
            free: entry_for(Tier::Free)?,
            basic: entry_for(Tier::Basic)?,
            premium: entry_for(Tier::Premium)?,
        };

        debug!("Tier registry built from configuration");
        Ok(registry)
    }

    /// Look up the definition for a tier.
    pub fn lookup(&self, tier: Tier) -> &TierDefinition {
        match tier {
            Tier::Guest => &self.guest,
            Tier::Free => &self.free,
            Tier::Basic => &self.basic,
            Tier::Premium => &self.premium,
        }
    }
}

impl Default for TierRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_table_matches_product_tiers() {
        let registry = TierRegistry::builtin();

        assert_eq!(*registry.lookup(Tier::Guest).daily_limit(), Limit::Limited(3));
        assert_eq!(*registry.lookup(Tier::Free).daily_limit(), Limit::Limited(20));
        assert_eq!(*registry.lookup(Tier::Basic).daily_limit(), Limit::Limited(100));
        assert_eq!(*registry.lookup(Tier::Premium).daily_limit(), Limit::Unlimited);
    }

    #[test]
    fn lookup_is_total_over_the_tier_set() {
        let registry = TierRegistry::builtin();
        for tier in Tier::iter() {
            assert_eq!(*registry.lookup(tier).tier(), tier);
        }
    }

    #[test]
    fn analysis_starts_at_basic() {
        let registry = TierRegistry::builtin();
        assert!(!registry.lookup(Tier::Guest).can_access_analysis());
        assert!(!registry.lookup(Tier::Free).can_access_analysis());
        assert!(registry.lookup(Tier::Basic).can_access_analysis());
        assert!(registry.lookup(Tier::Premium).can_access_analysis());
    }
}
