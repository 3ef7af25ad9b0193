//! Tiered theme detection.
//!
//! The detector runs its probes in priority order and returns the first
//! definitive answer. The probe chain is picked at runtime from the running
//! OS, so the orchestration itself is host-independent and testable anywhere.

use crate::probe::applescript::AppleScriptProbe;
use crate::probe::command::{CommandRunner, SystemCommandRunner};
use crate::probe::defaults::DefaultsProbe;
use crate::probe::registry::RegistryProbe;
use crate::probe::store::{host_store, PreferenceStore};
use crate::probe::ThemeProbe;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Deadline for callers that do not bring their own.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Host families with distinct probe chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// No detector registered; detection always yields `Unknown`.
    Other,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// Ordered chain of probes.
pub struct Detector {
    probes: Vec<Box<dyn ThemeProbe>>,
}

impl Detector {
    pub fn new(probes: Vec<Box<dyn ThemeProbe>>) -> Self {
        Self { probes }
    }

    /// Probe chain for `platform`, wired to the given OS facilities.
    pub fn for_platform(
        platform: Platform,
        runner: Arc<dyn CommandRunner>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let probes: Vec<Box<dyn ThemeProbe>> = match platform {
            // The defaults probe always answers, so the AppleScript tier only
            // runs if that probe is ever taught to defer.
            Platform::MacOs => vec![
                Box::new(DefaultsProbe::new(runner.clone())),
                Box::new(AppleScriptProbe::new(runner)),
            ],
            Platform::Windows => vec![Box::new(RegistryProbe::new(store))],
            Platform::Other => Vec::new(),
        };
        Self::new(probes)
    }

    /// Probe chain for the running host.
    pub fn for_host() -> Self {
        Self::for_platform(
            Platform::current(),
            Arc::new(SystemCommandRunner),
            host_store(),
        )
    }

    /// Names of the registered probes, in the order they run.
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|probe| probe.name()).collect()
    }

    /// Run probes until one is definitive. Never fails; a cancelled token or
    /// an exhausted chain yields [`Theme::Unknown`].
    pub async fn detect(&self, cancel: &CancellationToken) -> Theme {
        for probe in &self.probes {
            if cancel.is_cancelled() {
                debug!(probe = probe.name(), "detection cancelled before probe");
                return Theme::Unknown;
            }
            let result = probe.detect(cancel).await;
            trace!(probe = probe.name(), ?result, "probe finished");
            if result.definitive {
                let theme = Theme::from_name(&result.raw);
                debug!(probe = probe.name(), %theme, "definitive probe result");
                return theme;
            }
        }
        debug!("no probe produced a definitive result");
        Theme::Unknown
    }

    /// Like [`Detector::detect`], but gives up once `timeout` elapses.
    ///
    /// Probes run under a child of `cancel`: the deadline cancels only that
    /// child, while cancelling `cancel` still reaches the probes. Probes get to
    /// observe the deadline and wind down, so the result reflects how each
    /// probe treats an interrupted query.
    pub async fn detect_with_timeout(
        &self,
        cancel: &CancellationToken,
        timeout: Duration,
    ) -> Theme {
        let deadline = cancel.child_token();
        let detect = self.detect(&deadline);
        tokio::pin!(detect);
        tokio::select! {
            theme = &mut detect => theme,
            () = tokio::time::sleep(timeout) => {
                debug!(?timeout, "probe deadline reached; cancelling");
                deadline.cancel();
                detect.await
            }
        }
    }
}

/// Detect the running host's theme with a fresh [`Detector::for_host`] chain.
///
/// No deadline is applied; callers bound the run through `cancel`. The CLI
/// builds its own detector so it can apply [`DEFAULT_PROBE_TIMEOUT`].
pub async fn detect_theme(cancel: &CancellationToken) -> Theme {
    Detector::for_host().detect(cancel).await
}
