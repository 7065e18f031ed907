//! Configuration loader for the AquaSense dashboard backend.
//!
//! This module centralizes all runtime configuration values and their
//! defaults, loading from environment variables (with optional `.env` file
//! support provided by the caller). By consolidating configuration logic
//! here, we avoid scattering `env::var` calls throughout the codebase.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, ensure, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse an optional port-sized environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent
/// configuration snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// TCP port the HTTP API binds on.
    pub bind_port: u16,

    /// Seconds between refreshes of the active source's reading.
    pub refresh_interval_secs: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `BIND_PORT` – HTTP listen port (default: 8080)
/// - `REFRESH_INTERVAL_SECS` – reading refresh period (default: 5, min: 1)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let bind_port = parse_env_u16!("BIND_PORT", 8080);
    let refresh_interval_secs = parse_env_u32!("REFRESH_INTERVAL_SECS", 5);
    ensure!(
        refresh_interval_secs > 0,
        "REFRESH_INTERVAL_SECS must be at least 1"
    );

    Ok(Config {
        bind_port,
        refresh_interval_secs,
    })
}

impl Config {
    /// The refresh period as a [`Duration`], for the scheduler.
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval_secs))
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  BIND_PORT             : {}", self.bind_port);
        tracing::info!("  REFRESH_INTERVAL_SECS : {}", self.refresh_interval_secs);
    }
}
