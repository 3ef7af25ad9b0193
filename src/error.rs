//! Error types absorbed by the detection pipeline.
//!
//! None of these ever reach a caller of `detect_theme`: probes log them and
//! degrade to a non-definitive or default result instead.

use std::fmt;

// ---------------------------------------------------------------------------
// ProbeError
// ---------------------------------------------------------------------------

/// Errors arising from running an external query tool.
#[derive(Debug)]
pub enum ProbeError {
    /// The process could not be spawned or awaited.
    Spawn(String),
    /// The cancellation token fired before the process finished.
    Cancelled,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "spawn failed: {msg}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::error::Error for ProbeError {}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Errors when reading from a preference store.
#[derive(Debug)]
pub enum StoreError {
    /// The key or value does not exist.
    NotFound,
    /// The store refused access to the key or value.
    AccessDenied,
    /// No store backend exists on this host.
    Unsupported,
    Io(std::io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::AccessDenied => write!(f, "access denied"),
            Self::Unsupported => write!(f, "preference store unsupported on this host"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied,
            _ => Self::Io(e),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when resolving runtime configuration.
#[derive(Debug)]
pub enum ConfigError {
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
