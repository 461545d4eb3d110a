//! Tests for configuration loading and the tier registry.

use solace_core::{Limit, Tier};
use solace_error::SolaceErrorKind;
use solace_quota::{SolaceConfig, TierRegistry};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Create temp config");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

const FULL_CONFIG: &str = r#"
[quota]
window_secs = 3600
sweep_interval_secs = 60

[guest]
free_messages = 5

[tiers.guest]
daily_limit = 2
allowed_model = "companion-lite"

[tiers.free]
daily_limit = 10
allowed_model = "companion-lite"

[tiers.basic]
daily_limit = 50
allowed_model = "companion-standard"
can_access_analysis = true
can_access_all_modes = true
price_cents = 500

[tiers.premium]
allowed_model = "companion-pro"
can_access_analysis = true
can_access_all_modes = true
price_cents = 1500
"#;

#[test]
fn from_file_parses_the_full_table() {
    let file = write_config(FULL_CONFIG);
    let config = SolaceConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.quota.window_secs(), 3600);
    assert_eq!(*config.quota.sweep_interval_secs(), 60);
    assert_eq!(*config.guest.free_messages(), 5);
    assert_eq!(config.tiers.len(), 4);

    let basic = config.tier_entry(Tier::Basic).unwrap();
    assert_eq!(basic.daily_limit, Some(50));
    assert!(basic.can_access_analysis);
    assert_eq!(basic.price_cents, Some(500));
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let file = write_config(
        r#"
[tiers.guest]
daily_limit = 3
allowed_model = "companion-lite"
"#,
    );
    let config = SolaceConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.quota.window_secs(), 86_400);
    assert_eq!(*config.quota.sweep_interval_secs(), 300);
    assert_eq!(*config.guest.free_messages(), 3);

    let guest = config.tier_entry(Tier::Guest).unwrap();
    assert!(!guest.can_access_analysis);
    assert!(!guest.can_access_all_modes);
    assert_eq!(guest.price_cents, None);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = SolaceConfig::from_file("/nonexistent/solace.toml").unwrap_err();
    assert!(matches!(err.kind(), SolaceErrorKind::Config(_)));
}

#[test]
fn registry_builds_from_config() {
    let file = write_config(FULL_CONFIG);
    let config = SolaceConfig::from_file(file.path()).unwrap();
    let registry = TierRegistry::from_config(&config).unwrap();

    assert_eq!(*registry.lookup(Tier::Guest).daily_limit(), Limit::Limited(2));
    assert_eq!(*registry.lookup(Tier::Free).daily_limit(), Limit::Limited(10));
    // No daily_limit key in [tiers.premium] means unlimited.
    assert_eq!(*registry.lookup(Tier::Premium).daily_limit(), Limit::Unlimited);
    assert_eq!(registry.lookup(Tier::Premium).allowed_model(), "companion-pro");
}

#[test]
fn unknown_tier_name_fails_loud() {
    let mut contents = String::from(FULL_CONFIG);
    contents.push_str(
        r#"
[tiers.platinum]
daily_limit = 1000
allowed_model = "companion-pro"
"#,
    );
    let file = write_config(&contents);
    let config = SolaceConfig::from_file(file.path()).unwrap();

    let err = TierRegistry::from_config(&config).unwrap_err();
    assert!(matches!(
        err.kind(),
        SolaceErrorKind::InvalidTier(name) if name == "platinum"
    ));
}

#[test]
fn missing_tier_entry_fails_loud() {
    let file = write_config(
        r#"
[tiers.guest]
daily_limit = 3
allowed_model = "companion-lite"
"#,
    );
    let config = SolaceConfig::from_file(file.path()).unwrap();

    let err = TierRegistry::from_config(&config).unwrap_err();
    assert!(matches!(err.kind(), SolaceErrorKind::Config(_)));
    assert!(err.to_string().contains("free"));
}
