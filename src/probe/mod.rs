//! Platform probes.
//!
//! A probe queries one OS subsystem for an appearance signal and reports
//! whether its answer is definitive. Probes never fail: every error is
//! absorbed locally and turned into either a definitive default or a
//! deferral to the next probe in the chain.

pub mod applescript;
pub mod command;
pub mod defaults;
pub mod registry;
pub mod store;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// ProbeResult
// ---------------------------------------------------------------------------

/// Raw signal returned by one probe.
///
/// `definitive == false` means "could not tell, try the next probe". A
/// definitive result with an unrecognized `raw` still stops the chain and
/// resolves to `Theme::Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub raw: String,
    pub definitive: bool,
}

impl ProbeResult {
    /// An answer that stops the fallback chain.
    pub fn definitive(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            definitive: true,
        }
    }

    /// No answer; the detector moves on to the next probe.
    pub fn deferred() -> Self {
        Self {
            raw: String::new(),
            definitive: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeProbe trait
// ---------------------------------------------------------------------------

/// A single strategy for reading the OS appearance.
#[async_trait]
pub trait ThemeProbe: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Query the OS once. Implementations must honor `cancel` and bind any
    /// external work they start to it.
    async fn detect(&self, cancel: &CancellationToken) -> ProbeResult;
}
