//! Runtime configuration from environment variables.
//!
//! Precedence (highest wins):
//! 1. Command-line flags (`current --timeout-ms`), applied by the CLI.
//! 2. Environment variables (`DARGHT_PROBE_TIMEOUT_MS`, `DARGHT_LOG`).
//! 3. Built-in defaults.

use crate::detector::DEFAULT_PROBE_TIMEOUT;
use crate::error::ConfigError;
use std::time::Duration;

pub const PROBE_TIMEOUT_ENV: &str = "DARGHT_PROBE_TIMEOUT_MS";
pub const LOG_ENV: &str = "DARGHT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deadline applied to one detection run.
    pub probe_timeout: Duration,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Non-fatal problems found while resolving config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}

/// Resolve config from the process environment.
pub fn load_config() -> LoadedConfig {
    load_config_with(&|name: &str| std::env::var(name).ok())
}

/// Resolve config through `env_lookup`. Invalid values keep their defaults
/// and are reported as warnings.
pub fn load_config_with<FEnv>(env_lookup: &FEnv) -> LoadedConfig
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    let mut diagnostics = ConfigDiagnostics::default();

    if let Some(raw) = non_empty(env_lookup, PROBE_TIMEOUT_ENV) {
        match parse_timeout_ms(&raw) {
            Ok(timeout) => config.probe_timeout = timeout,
            Err(e) => diagnostics.warnings.push(format!("{PROBE_TIMEOUT_ENV}: {e}")),
        }
    }
    if let Some(filter) = non_empty(env_lookup, LOG_ENV) {
        config.log_filter = filter;
    }

    LoadedConfig {
        config,
        diagnostics,
    }
}

/// Parse a millisecond timeout, clamped to at least 1ms.
pub fn parse_timeout_ms(raw: &str) -> Result<Duration, ConfigError> {
    let trimmed = raw.trim();
    let millis = trimmed.parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!(
            "timeout `{trimmed}` is not a whole number of milliseconds"
        ))
    })?;
    Ok(Duration::from_millis(millis.max(1)))
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
