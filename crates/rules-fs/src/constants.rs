//! Well-known file names.

use std::path::Path;

/// File names the tool looks for on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesPath {
    /// The rules file a dependency ships at its root
    UsageRules,
    /// Optional project configuration in the working directory
    ProjectConfig,
    /// Cargo manifest used for dependency resolution
    CargoManifest,
}

impl RulesPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsageRules => "usage-rules.md",
            Self::ProjectConfig => "usage-rules.toml",
            Self::CargoManifest => "Cargo.toml",
        }
    }
}

impl AsRef<Path> for RulesPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for RulesPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for RulesPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
