//! Configuration structures for tier tables and quota settings.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from solace.toml)
//! - User overrides (./solace.toml or ~/.config/solace/solace.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use solace_core::{Limit, Tier, TierDefinition};
use solace_error::{ConfigError, SolaceError, SolaceResult};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// One tier's row in the `[tiers]` table.
///
/// # Example
///
/// ```toml
/// [tiers.basic]
/// daily_limit = 100
/// allowed_model = "companion-standard"
/// can_access_analysis = true
/// can_access_all_modes = true
/// price_cents = 900
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierEntry {
    /// Daily request allowance; omit for an unlimited tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<u32>,

    /// Model identifier conversations on this tier run on.
    pub allowed_model: String,

    /// Whether session analysis reports are available.
    #[serde(default)]
    pub can_access_analysis: bool,

    /// Whether non-standard counseling modes are available.
    #[serde(default)]
    pub can_access_all_modes: bool,

    /// Monthly price in cents, if the tier is paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<u32>,
}

impl TierEntry {
    /// Materialize this entry into an immutable definition for `tier`.
    pub fn into_definition(self, tier: Tier) -> TierDefinition {
        let daily_limit = match self.daily_limit {
            Some(max) => Limit::Limited(max),
            None => Limit::Unlimited,
        };
        TierDefinition::new(
            tier,
            daily_limit,
            self.allowed_model,
            self.can_access_analysis,
            self.can_access_all_modes,
            self.price_cents,
        )
    }
}

/// Usage-counter window and sweep settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct QuotaSettings {
    /// Quota window length in seconds (one day by default).
    #[serde(default = "default_window_secs")]
    #[builder(default = "default_window_secs()")]
    window_secs: u64,

    /// Interval between background sweeps of expired usage records.
    #[serde(default = "default_sweep_interval_secs")]
    #[builder(default = "default_sweep_interval_secs()")]
    sweep_interval_secs: u64,
}

fn default_window_secs() -> u64 {
    86_400
}

fn default_sweep_interval_secs() -> u64 {
    300
}

impl QuotaSettings {
    /// The quota window as a duration, for the admission gate.
    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.window_secs as i64)
    }

    /// The sweep interval as a duration, for the background sweeper.
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

/// Guest allowance settings shared with the client-side tracker.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GuestSettings {
    /// Lifetime message allowance before sign-up is required.
    #[serde(default = "default_free_messages")]
    free_messages: u32,
}

fn default_free_messages() -> u32 {
    3
}

impl Default for GuestSettings {
    fn default() -> Self {
        Self {
            free_messages: default_free_messages(),
        }
    }
}

/// Top-level Solace configuration.
///
/// Loads tier tables and quota settings from TOML files with a precedence
/// system:
/// 1. Bundled defaults (include_str! from solace.toml)
/// 2. User override (./solace.toml or ~/.config/solace/solace.toml)
///
/// # Example
///
/// ```no_run
/// use solace_quota::SolaceConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = SolaceConfig::load()?;
/// println!("Quota window: {}s", config.quota.window_secs());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct SolaceConfig {
    /// Map of tier name to tier entry.
    #[serde(default)]
    pub tiers: HashMap<String, TierEntry>,

    /// Usage-counter settings.
    #[serde(default)]
    pub quota: QuotaSettings,

    /// Guest allowance settings.
    #[serde(default)]
    pub guest: GuestSettings,
}

impl SolaceConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SolaceResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SolaceError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SolaceError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (solace.toml shipped with the library)
    /// 2. User config in home directory (~/.config/solace/solace.toml)
    /// 3. User config in current directory (./solace.toml)
    ///
    /// User config files are optional and will be silently skipped if not
    /// found.
    #[instrument]
    pub fn load() -> SolaceResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../solace.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/solace/solace.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("solace").required(false));

        builder
            .build()
            .map_err(|e| {
                SolaceError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SolaceError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Get the entry for a tier, if present in the table.
    pub fn tier_entry(&self, tier: Tier) -> Option<&TierEntry> {
        self.tiers.get(&tier.to_string())
    }
}
