//! Project configuration and resolver selection.
//!
//! An optional `usage-rules.toml` in the project root picks where
//! dependencies come from:
//!
//! ```toml
//! [deps]
//! source = "directory"
//! dir = "vendor"
//! ```

use rules_fs::{ConfigStore, NormalizedPath, RulesPath};
use serde::Deserialize;

use crate::resolver::{CargoMetadataResolver, DependencyResolver, DirectoryResolver};
use crate::{Error, Result};

/// Where dependencies are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencySource {
    /// `cargo metadata` for the project manifest
    #[default]
    Cargo,
    /// Subdirectories of a dependency directory
    Directory,
}

/// The `[deps]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepsConfig {
    pub source: DependencySource,
    /// Dependency directory, relative to the project root.
    pub dir: Option<String>,
    /// Cargo manifest, relative to the project root.
    pub manifest_path: Option<String>,
}

/// Contents of `usage-rules.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub deps: DepsConfig,
}

impl ProjectConfig {
    /// Load `usage-rules.toml` from `root`, or defaults if there is none.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(RulesPath::ProjectConfig.as_str());
        let config = ConfigStore::new().load_optional(&path)?;
        Ok(config.unwrap_or_default())
    }
}

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolverOverrides {
    pub deps_dir: Option<NormalizedPath>,
    pub manifest_path: Option<NormalizedPath>,
}

/// Pick the resolver for a project.
///
/// Precedence: an explicit dependency directory, then the config file's
/// source, then `cargo metadata` on `root/Cargo.toml`.
pub fn resolver_for(
    root: &NormalizedPath,
    config: &ProjectConfig,
    overrides: &ResolverOverrides,
) -> Result<Box<dyn DependencyResolver>> {
    if let Some(dir) = &overrides.deps_dir {
        return Ok(Box::new(DirectoryResolver::new(dir.clone())));
    }

    match config.deps.source {
        DependencySource::Directory => {
            let dir = config.deps.dir.as_deref().ok_or_else(|| Error::InvalidConfig {
                path: root.join(RulesPath::ProjectConfig.as_str()).to_native(),
                message: "deps.source = \"directory\" requires deps.dir".into(),
            })?;
            Ok(Box::new(DirectoryResolver::new(root.join(dir))))
        }
        DependencySource::Cargo => {
            let manifest = overrides.manifest_path.clone().unwrap_or_else(|| {
                let relative = config
                    .deps
                    .manifest_path
                    .as_deref()
                    .unwrap_or(RulesPath::CargoManifest.as_str());
                root.join(relative)
            });
            Ok(Box::new(CargoMetadataResolver::new(manifest)))
        }
    }
}
