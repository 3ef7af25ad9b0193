//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the command's answer.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. A malformed `filter` falls back to the
/// default directive; a second call is a no-op.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
