//! darght: report whether the host OS appearance is dark, light, or unknown.
//!
//! Detection runs a per-platform chain of probes selected at runtime and
//! never fails: every error degrades to [`Theme::Unknown`].
//!
//! # Quick start
//!
//! ```no_run
//! use darght::detect_theme;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let theme = detect_theme(&CancellationToken::new()).await;
//! println!("{theme}");
//! # }
//! ```

pub mod build_info;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod logging;
pub mod probe;
#[cfg(test)]
pub mod testsupport;
pub mod theme;

pub use detector::{detect_theme, Detector, Platform, DEFAULT_PROBE_TIMEOUT};
pub use theme::{normalize, Theme};
