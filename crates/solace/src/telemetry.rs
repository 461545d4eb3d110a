//! Tracing subscriber setup for Solace deployments.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing output for a Solace deployment.
///
/// # Arguments
///
/// * `service_name` - Name of the service for log attribution
/// * `export_console` - Whether to log to console (useful for development)
///
/// # Returns
///
/// Result indicating success or failure of initialization.
pub fn init_telemetry(
    service_name: &str,
    export_console: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,solace=debug"));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if export_console {
        subscriber.with(tracing_subscriber::fmt::layer()).init();
    } else {
        subscriber.init();
    }

    info!(service_name, "Telemetry initialized");

    Ok(())
}

/// Initialize console-only telemetry.
///
/// This is useful for testing or when running without an observability
/// backend.
pub fn init_console_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,solace=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
