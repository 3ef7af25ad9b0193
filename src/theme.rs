//! The three-valued appearance enum and the normalizer that feeds it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// OS-level UI appearance.
///
/// Conversion from strings is total: anything that is not exactly `"dark"` or
/// `"light"` becomes [`Theme::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
    #[default]
    Unknown,
}

impl Theme {
    /// Canonical lowercase name printed by the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Unknown => "unknown",
        }
    }

    /// Exact, case-sensitive lookup. Unrecognized input maps to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Theme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Map free-form OS output onto `"dark"`, `"light"` or `"unknown"`.
///
/// Matching is a case-insensitive substring search so values like `DarkAqua`
/// or whole sentences still classify. `dark` wins when both words appear.
pub fn normalize(raw: &str) -> &'static str {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return "unknown";
    }
    if lowered.contains("dark") {
        return "dark";
    }
    if lowered.contains("light") {
        return "light";
    }
    "unknown"
}
