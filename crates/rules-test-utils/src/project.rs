//! [`TestProject`] builder for usage-rules test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory, relative to the project root, that holds fake dependencies.
pub const DEPS_DIR: &str = "deps";

/// A temporary project directory with a `deps/` directory of fake
/// dependencies.
///
/// # Example
///
/// ```rust,no_run
/// use rules_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.add_dep("serde", Some("Derive, don't hand-write."));
/// project.add_dep("rand", None);
/// project.write_file("AGENTS.md", "# Agents\n");
/// project.assert_file_contains("AGENTS.md", "# Agents");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project with an empty `deps/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(DEPS_DIR)).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the dependency directory.
    pub fn deps_dir(&self) -> PathBuf {
        self.root().join(DEPS_DIR)
    }

    /// Add a dependency directory, with a `usage-rules.md` if `rules` is set.
    pub fn add_dep(&self, name: &str, rules: Option<&str>) -> PathBuf {
        let dir = self.deps_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(rules) = rules {
            fs::write(dir.join("usage-rules.md"), rules).unwrap();
        }
        dir
    }

    /// Write a file relative to the project root.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Read a file relative to the project root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the project root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
