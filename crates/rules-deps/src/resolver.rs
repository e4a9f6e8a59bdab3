//! Sources of the project's dependency list.

use std::ffi::OsString;
use std::fs;
use std::process::Command;

use rules_fs::NormalizedPath;
use serde::Deserialize;

use crate::{Dependency, Error, Result};

/// Produces the dependencies to scan, in the order they should be merged.
pub trait DependencyResolver {
    fn resolve(&self) -> Result<Vec<Dependency>>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// A fixed dependency list.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    dependencies: Vec<Dependency>,
}

impl StaticResolver {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }
}

impl DependencyResolver for StaticResolver {
    fn resolve(&self) -> Result<Vec<Dependency>> {
        Ok(self.dependencies.clone())
    }

    fn describe(&self) -> String {
        format!("{} static dependencies", self.dependencies.len())
    }
}

/// Treats every immediate subdirectory of `root` as a dependency.
///
/// Matches layouts such as `vendor/` or a `deps/` checkout directory. Entries
/// are sorted by name. A missing directory yields no dependencies.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: NormalizedPath,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }
}

impl DependencyResolver for DirectoryResolver {
    fn resolve(&self) -> Result<Vec<Dependency>> {
        if !self.root.is_dir() {
            tracing::debug!(dir = %self.root, "dependency directory does not exist");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(self.root.to_native())
            .map_err(|e| rules_fs::Error::io(self.root.to_native(), e))?;

        let mut dependencies: Vec<Dependency> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let path = self.root.join(&name);
                Dependency::new(name, path)
            })
            .collect();

        dependencies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dependencies)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root)
    }
}

/// Resolves dependencies through `cargo metadata`.
///
/// Every package in the resolved graph that is not a workspace member becomes
/// a dependency rooted at its manifest directory.
#[derive(Debug, Clone)]
pub struct CargoMetadataResolver {
    manifest_path: NormalizedPath,
}

impl CargoMetadataResolver {
    pub fn new(manifest_path: impl Into<NormalizedPath>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    fn cargo() -> OsString {
        std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"))
    }
}

impl DependencyResolver for CargoMetadataResolver {
    fn resolve(&self) -> Result<Vec<Dependency>> {
        let manifest = self.manifest_path.to_native();
        tracing::debug!(manifest = %self.manifest_path, "running cargo metadata");

        let output = Command::new(Self::cargo())
            .args(["metadata", "--format-version", "1", "--manifest-path"])
            .arg(&manifest)
            .output()
            .map_err(|e| Error::CargoMetadata {
                manifest: manifest.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::CargoMetadata {
                manifest,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_metadata(&String::from_utf8_lossy(&output.stdout))
    }

    fn describe(&self) -> String {
        format!("cargo metadata for {}", self.manifest_path)
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    id: String,
    manifest_path: String,
}

/// Turn `cargo metadata --format-version 1` output into dependencies.
///
/// Sorted by name. When several versions of a crate are in the graph, the
/// first one in cargo's package order is kept.
pub fn parse_metadata(json: &str) -> Result<Vec<Dependency>> {
    let metadata: Metadata = serde_json::from_str(json)?;

    let mut dependencies: Vec<Dependency> = metadata
        .packages
        .into_iter()
        .filter(|package| !metadata.workspace_members.contains(&package.id))
        .filter_map(|package| {
            let manifest = NormalizedPath::new(&package.manifest_path);
            manifest.parent().map(|dir| Dependency::new(package.name, dir))
        })
        .collect();

    dependencies.sort_by(|a, b| a.name.cmp(&b.name));
    dependencies.dedup_by(|later, earlier| {
        let duplicate = later.name == earlier.name;
        if duplicate {
            tracing::debug!(name = %later.name, skipped = %later.path, "duplicate package version");
        }
        duplicate
    });
    Ok(dependencies)
}
