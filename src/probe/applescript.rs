//! macOS scripting-bridge probe asking System Events for the live dark-mode flag.

use super::command::CommandRunner;
use super::{ProbeResult, ThemeProbe};
use crate::theme::normalize;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const OSASCRIPT_PROGRAM: &str = "osascript";
const DARK_MODE_SCRIPT: &str =
    r#"tell application "System Events" to tell appearance preferences to get dark mode"#;

/// Queries appearance state through `osascript`.
pub struct AppleScriptProbe {
    runner: Arc<dyn CommandRunner>,
}

impl AppleScriptProbe {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ThemeProbe for AppleScriptProbe {
    fn name(&self) -> &'static str {
        "applescript"
    }

    async fn detect(&self, cancel: &CancellationToken) -> ProbeResult {
        let output = match self
            .runner
            .run(OSASCRIPT_PROGRAM, &["-e", DARK_MODE_SCRIPT], cancel)
            .await
        {
            Ok(output) if output.success => output,
            Ok(output) => {
                debug!(stderr = output.stderr.trim(), "osascript exited non-zero");
                return ProbeResult::deferred();
            }
            Err(err) => {
                debug!(error = %err, "osascript invocation failed");
                return ProbeResult::deferred();
            }
        };

        let trimmed = output.stdout.trim();
        if trimmed.is_empty() {
            return ProbeResult::deferred();
        }
        ProbeResult::definitive(interpret_flag(trimmed))
    }
}

fn interpret_flag(raw: &str) -> &'static str {
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") {
        "dark"
    } else if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("no") {
        "light"
    } else {
        normalize(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{Script, ScriptedRunner};

    async fn detect_with(script: Script) -> ProbeResult {
        let probe = AppleScriptProbe::new(Arc::new(ScriptedRunner::new(script)));
        probe.detect(&CancellationToken::new()).await
    }

    #[test]
    fn boolean_words_map_to_modes() {
        assert_eq!(interpret_flag("true"), "dark");
        assert_eq!(interpret_flag("YES"), "dark");
        assert_eq!(interpret_flag("False"), "light");
        assert_eq!(interpret_flag("no"), "light");
        assert_eq!(interpret_flag("Light appearance"), "light");
        assert_eq!(interpret_flag("maybe"), "unknown");
    }

    #[tokio::test]
    async fn passes_script_to_osascript() {
        let runner = Arc::new(ScriptedRunner::new(Script::exit_success("true\n")));
        let probe = AppleScriptProbe::new(runner.clone());
        let result = probe.detect(&CancellationToken::new()).await;
        assert_eq!(result, ProbeResult::definitive("dark"));
        assert_eq!(
            runner.calls(),
            vec![format!("osascript -e {DARK_MODE_SCRIPT}")]
        );
    }

    #[tokio::test]
    async fn unrecognized_output_is_definitive_unknown() {
        assert_eq!(
            detect_with(Script::exit_success("perhaps")).await,
            ProbeResult::definitive("unknown")
        );
    }

    #[tokio::test]
    async fn failures_and_empty_output_defer() {
        assert_eq!(
            detect_with(Script::exit_failure("true")).await,
            ProbeResult::deferred()
        );
        assert_eq!(
            detect_with(Script::exit_success("   ")).await,
            ProbeResult::deferred()
        );
        assert_eq!(detect_with(Script::SpawnFailure).await, ProbeResult::deferred());
        assert_eq!(detect_with(Script::Cancelled).await, ProbeResult::deferred());
    }
}
