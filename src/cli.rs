//! Command dispatch for the `darght` binary.
//!
//! Parsing never fails from the user's point of view: help flags, unknown
//! subcommands, and malformed arguments all print the usage text and the
//! process still exits successfully.

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::detector::Detector;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Usage text printed for no arguments, help requests, and anything unrecognized.
pub const USAGE: &str = "\
Usage:

  darght current [--timeout-ms <MS>]   Print current theme (dark/light/unknown)
  darght version                       Print version information
  darght help                          Show this message";

/// Report the host OS light/dark appearance.
#[derive(Debug, Parser)]
#[command(
    name = "darght",
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current theme.
    #[command(disable_help_flag = true)]
    Current {
        /// Override the probe deadline in milliseconds.
        #[arg(long = "timeout-ms", value_name = "MS")]
        timeout_ms: Option<u64>,
        /// Extra words after `current` are ignored.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<OsString>,
    },
    /// Print version, commit, and build date.
    Version,
}

/// What the binary should do for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Usage,
    Current { timeout: Option<Duration> },
    Version,
}

/// Map raw process arguments (program name first) to an [`Action`].
///
/// Dispatch is keyed on the first argument: anything following `current`
/// that does not parse is ignored and the default deadline applies.
pub fn parse_action<I, T>(args: I) -> Action
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Args::try_parse_from(&args) {
        Ok(Args {
            command: Some(Command::Current { timeout_ms, .. }),
        }) => Action::Current {
            timeout: timeout_ms.map(|ms| Duration::from_millis(ms.max(1))),
        },
        Ok(Args {
            command: Some(Command::Version),
        }) => Action::Version,
        Ok(Args { command: None }) => Action::Usage,
        Err(err) if args.get(1).is_some_and(|arg| arg == "current") => {
            debug!(kind = ?err.kind(), "ignoring malformed arguments after `current`");
            Action::Current { timeout: None }
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "argument parse failed; showing usage");
            Action::Usage
        }
    }
}

/// Run one invocation against explicit collaborators, writing to `out`.
///
/// Only write failures are reported; detection itself cannot fail.
pub async fn run<I, T, W>(
    args: I,
    detector: &Detector,
    build: &BuildInfo,
    config: &Config,
    out: &mut W,
) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match parse_action(args) {
        Action::Usage => writeln!(out, "{USAGE}"),
        Action::Version => writeln!(out, "{}", build.version_text()),
        Action::Current { timeout } => {
            let timeout = timeout.unwrap_or(config.probe_timeout);
            let cancel = CancellationToken::new();
            let theme = detector.detect_with_timeout(&cancel, timeout).await;
            writeln!(out, "{theme}")
        }
    }
}
