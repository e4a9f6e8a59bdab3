//! Project context: where the project is and where its dependencies come from.

use std::path::Path;

use rules_deps::{Dependency, DependencyResolver, ProjectConfig, ResolverOverrides, resolver_for};
use rules_fs::{DiskStore, NormalizedPath};

use crate::error::Result;

/// Everything a command needs to find dependencies and touch files.
pub struct ProjectContext {
    root: NormalizedPath,
    resolver: Box<dyn DependencyResolver>,
    store: DiskStore,
}

impl ProjectContext {
    /// Build the context for the project in `cwd`.
    ///
    /// Relative `deps_dir` and `manifest_path` are taken relative to `cwd`.
    /// The root is canonicalized, so it must exist.
    pub fn new(cwd: &Path, deps_dir: Option<&Path>, manifest_path: Option<&Path>) -> Result<Self> {
        let root = NormalizedPath::new(cwd).canonicalize()?;
        let cwd = root.to_native();
        let config = ProjectConfig::load(&root)?;
        let overrides = ResolverOverrides {
            deps_dir: deps_dir.map(|dir| NormalizedPath::new(cwd.join(dir))),
            manifest_path: manifest_path.map(|path| NormalizedPath::new(cwd.join(path))),
        };
        let resolver = resolver_for(&root, &config, &overrides)?;
        tracing::debug!(root = %root, source = %resolver.describe(), "project context");

        Ok(Self {
            root,
            resolver,
            store: DiskStore::new(),
        })
    }

    pub fn store(&self) -> &DiskStore {
        &self.store
    }

    /// Resolve the project's dependencies.
    pub fn dependencies(&self) -> Result<Vec<Dependency>> {
        let dependencies = self.resolver.resolve()?;
        tracing::debug!(count = dependencies.len(), "resolved dependencies");
        Ok(dependencies)
    }

    /// A path given on the command line, resolved against the project root.
    pub fn target(&self, file: &Path) -> NormalizedPath {
        NormalizedPath::new(self.root.to_native().join(file))
    }
}
