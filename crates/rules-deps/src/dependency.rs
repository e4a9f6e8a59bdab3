//! The dependency model.

use rules_fs::{NormalizedPath, RulesPath};

/// A dependency and the directory holding its sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub path: NormalizedPath,
}

impl Dependency {
    pub fn new(name: impl Into<String>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Where this dependency's `usage-rules.md` would be.
    pub fn rules_path(&self) -> NormalizedPath {
        self.path.join(RulesPath::UsageRules.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_path() {
        let dep = Dependency::new("serde", "/deps/serde-1.0.0");
        assert_eq!(dep.rules_path().as_str(), "/deps/serde-1.0.0/usage-rules.md");
    }
}
