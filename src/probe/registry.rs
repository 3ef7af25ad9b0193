//! Windows personalization probe over a [`PreferenceStore`].

use super::store::PreferenceStore;
use super::{ProbeResult, ThemeProbe};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Key holding the per-user light/dark switches.
pub const PERSONALIZE_PATH: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
/// App-level preference; consulted first.
pub const APPS_USE_LIGHT_THEME: &str = "AppsUseLightTheme";
/// System-level preference; consulted only when the app value is absent.
pub const SYSTEM_USES_LIGHT_THEME: &str = "SystemUsesLightTheme";

/// Reads `AppsUseLightTheme`, falling back to `SystemUsesLightTheme`.
pub struct RegistryProbe {
    store: Arc<dyn PreferenceStore>,
}

impl RegistryProbe {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ThemeProbe for RegistryProbe {
    fn name(&self) -> &'static str {
        "registry"
    }

    async fn detect(&self, cancel: &CancellationToken) -> ProbeResult {
        if cancel.is_cancelled() {
            return ProbeResult::deferred();
        }

        let key = match self.store.open_key(PERSONALIZE_PATH) {
            Ok(key) => key,
            Err(err) => {
                debug!(error = %err, path = PERSONALIZE_PATH, "personalize key unavailable");
                return ProbeResult::deferred();
            }
        };

        for name in [APPS_USE_LIGHT_THEME, SYSTEM_USES_LIGHT_THEME] {
            if cancel.is_cancelled() {
                return ProbeResult::deferred();
            }
            match key.read_u32(name) {
                Ok(value) => {
                    let mode = mode_for_value(value);
                    debug!(value_name = name, value, mode, "personalize value read");
                    return ProbeResult::definitive(mode);
                }
                Err(err) => {
                    debug!(value_name = name, error = %err, "personalize value unavailable")
                }
            }
        }
        ProbeResult::deferred()
    }
}

/// `*UseLightTheme` is a boolean DWORD; anything else is an answer we can't read.
fn mode_for_value(value: u32) -> &'static str {
    match value {
        0 => "dark",
        1 => "light",
        _ => "unknown",
    }
}
