//! macOS preference-database probe (`defaults read -g AppleInterfaceStyle`).

use super::command::CommandRunner;
use super::{ProbeResult, ThemeProbe};
use crate::theme::normalize;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const DEFAULTS_PROGRAM: &str = "defaults";
const DEFAULTS_ARGS: [&str; 3] = ["read", "-g", "AppleInterfaceStyle"];

/// Reads the global `AppleInterfaceStyle` preference.
///
/// macOS only writes that key while dark mode is on, so a failed read with no
/// output means the key is absent and the light default is active. Every path
/// through this probe is therefore definitive.
pub struct DefaultsProbe {
    runner: Arc<dyn CommandRunner>,
}

impl DefaultsProbe {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ThemeProbe for DefaultsProbe {
    fn name(&self) -> &'static str {
        "defaults"
    }

    async fn detect(&self, cancel: &CancellationToken) -> ProbeResult {
        let (success, stdout) = match self
            .runner
            .run(DEFAULTS_PROGRAM, &DEFAULTS_ARGS, cancel)
            .await
        {
            Ok(output) => (output.success, output.stdout),
            // Spawn failures and cancellation look like a failed read with no output.
            Err(err) => {
                debug!(error = %err, "defaults invocation failed");
                (false, String::new())
            }
        };

        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            debug!(success, "AppleInterfaceStyle unset; assuming light");
            return ProbeResult::definitive("light");
        }
        let mode = normalize(trimmed);
        debug!(success, raw = trimmed, mode, "AppleInterfaceStyle read");
        ProbeResult::definitive(mode)
    }
}
