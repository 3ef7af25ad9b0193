//! Shared fakes for probe and detector test modules.
//!
//! `ScriptedRunner` stands in for external query tools and `MemoryStore` for
//! the registry, so platform probes can be exercised on any host.

use crate::error::{ProbeError, StoreError};
use crate::probe::command::{CommandOutput, CommandRunner};
use crate::probe::store::{PreferenceKey, PreferenceStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Canned behavior for one [`ScriptedRunner`].
#[derive(Debug, Clone)]
pub enum Script {
    /// The process ran; `success` mirrors a zero exit status.
    Exit { success: bool, stdout: String },
    SpawnFailure,
    Cancelled,
}

impl Script {
    pub fn exit_success(stdout: &str) -> Self {
        Self::Exit {
            success: true,
            stdout: stdout.to_string(),
        }
    }

    pub fn exit_failure(stdout: &str) -> Self {
        Self::Exit {
            success: false,
            stdout: stdout.to_string(),
        }
    }
}

/// Command runner that replays one script for every invocation.
#[derive(Debug)]
pub struct ScriptedRunner {
    script: Script,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Invocations seen so far, formatted as `program arg1 arg2`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        _cancel: &CancellationToken,
    ) -> Result<CommandOutput, ProbeError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().expect("calls lock").push(line);

        match &self.script {
            Script::Exit { success, stdout } => Ok(CommandOutput {
                success: *success,
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Script::SpawnFailure => Err(ProbeError::Spawn(format!("{program}: not found"))),
            Script::Cancelled => Err(ProbeError::Cancelled),
        }
    }
}

/// In-memory preference store that records every open and read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: BTreeMap<String, BTreeMap<String, u32>>,
    deny_access: bool,
    cancel_on_read: Option<CancellationToken>,
    opens: Mutex<usize>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty key at `path`.
    pub fn with_key(mut self, path: &str) -> Self {
        self.keys.entry(path.to_string()).or_default();
        self
    }

    pub fn with_value(mut self, path: &str, name: &str, value: u32) -> Self {
        self.keys
            .entry(path.to_string())
            .or_default()
            .insert(name.to_string(), value);
        self
    }

    /// Make every `open_key` fail with access denied.
    pub fn deny_access(mut self) -> Self {
        self.deny_access = true;
        self
    }

    /// Cancel `token` as a side effect of every value read.
    pub fn cancel_on_read(mut self, token: &CancellationToken) -> Self {
        self.cancel_on_read = Some(token.clone());
        self
    }

    pub fn open_count(&self) -> usize {
        *self.opens.lock().expect("opens lock")
    }

    /// Value names read so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().expect("reads lock").clone()
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().expect("reads lock").len()
    }
}

impl PreferenceStore for MemoryStore {
    fn open_key(&self, path: &str) -> Result<Box<dyn PreferenceKey>, StoreError> {
        *self.opens.lock().expect("opens lock") += 1;
        if self.deny_access {
            return Err(StoreError::AccessDenied);
        }
        let values = self.keys.get(path).cloned().ok_or(StoreError::NotFound)?;
        Ok(Box::new(MemoryKey {
            values,
            reads: Arc::clone(&self.reads),
            cancel_on_read: self.cancel_on_read.clone(),
        }))
    }
}

struct MemoryKey {
    values: BTreeMap<String, u32>,
    reads: Arc<Mutex<Vec<String>>>,
    cancel_on_read: Option<CancellationToken>,
}

impl PreferenceKey for MemoryKey {
    fn read_u32(&self, name: &str) -> Result<u32, StoreError> {
        self.reads.lock().expect("reads lock").push(name.to_string());
        if let Some(token) = &self.cancel_on_read {
            token.cancel();
        }
        self.values.get(name).copied().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_runner_records_invocations() {
        let runner = ScriptedRunner::new(Script::exit_success("ok"));
        let out = runner
            .run("tool", &["a", "b"], &CancellationToken::new())
            .await
            .expect("scripted success");
        assert_eq!(out.stdout, "ok");
        assert_eq!(runner.calls(), vec!["tool a b".to_string()]);
    }

    #[test]
    fn memory_store_counts_opens_and_reads() {
        let store = MemoryStore::new().with_value("k", "v", 3);
        let key = store.open_key("k").ok().expect("key exists");
        assert_eq!(key.read_u32("v").ok(), Some(3));
        assert!(matches!(key.read_u32("missing"), Err(StoreError::NotFound)));
        assert!(matches!(store.open_key("other").err(), Some(StoreError::NotFound)));
        assert_eq!(store.open_count(), 2);
        assert_eq!(store.read_count(), 2);
    }
}
