//! Build metadata for the `version` command.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("DARGHT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time. Empty when unavailable.
pub const BUILD_TIMESTAMP: &str = env!("DARGHT_BUILD_TIMESTAMP");

/// Version metadata handed to the version printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub build_date: String,
}

impl BuildInfo {
    /// Metadata embedded in this binary.
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
            commit: GIT_COMMIT.to_string(),
            build_date: BUILD_TIMESTAMP.to_string(),
        }
    }

    /// Text printed by `darght version`. The build line is omitted when the
    /// date is unknown.
    pub fn version_text(&self) -> String {
        let mut text = format!("darght {}\ncommit: {}", self.version, self.commit);
        if !self.build_date.trim().is_empty() {
            text.push_str("\nbuilt: ");
            text.push_str(&self.build_date);
        }
        text
    }
}
