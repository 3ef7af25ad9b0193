//! External command execution for probes that shell out.

use crate::error::ProbeError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Facility for invoking external query tools.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion, or until `cancel` fires.
    ///
    /// A non-zero exit is not an error: it is reported through
    /// [`CommandOutput::success`] alongside whatever the process printed.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> Result<CommandOutput, ProbeError>;
}

/// Runs commands as real child processes via tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> Result<CommandOutput, ProbeError> {
        if cancel.is_cancelled() {
            return Err(ProbeError::Cancelled);
        }

        let mut cmd = Command::new(program);
        // Dropping the wait future on cancellation must also terminate the child.
        cmd.kill_on_drop(true);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        trace!(program, ?args, "spawning probe command");
        let child = cmd
            .spawn()
            .map_err(|e| ProbeError::Spawn(format!("{program}: {e}")))?;

        let output = tokio::select! {
            result = child.wait_with_output() => {
                result.map_err(|e| ProbeError::Spawn(format!("{program}: {e}")))?
            }
            () = cancel.cancelled() => {
                debug!(program, "probe command cancelled; child killed");
                return Err(ProbeError::Cancelled);
            }
        };

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
