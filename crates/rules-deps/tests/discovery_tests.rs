//! End-to-end discovery against a real dependency directory.

use pretty_assertions::assert_eq;
use rules_blocks::RuleBlock;
use rules_deps::{
    CargoMetadataResolver, DependencyResolver, DependencySource, DirectoryResolver, Error,
    ProjectConfig, ResolverOverrides, load_rules, resolver_for, scan,
};
use rules_fs::{DiskStore, NormalizedPath};
use rules_test_utils::TestProject;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a minimal library crate at `dir`.
fn write_crate(dir: &Path, name: &str, extra: &str) {
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(
        dir.join("Cargo.toml"),
        format!(
            "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n{extra}"
        ),
    )
    .unwrap();
    fs::write(dir.join("src/lib.rs"), "").unwrap();
}

/// An `app` crate with path dependencies `helper` (shipping rules) and
/// `plain` (without), laid out as siblings so neither is a workspace member.
fn cargo_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_crate(&root.join("helper"), "helper", "");
    fs::write(root.join("helper/usage-rules.md"), "Call helper::init first.\n").unwrap();
    write_crate(&root.join("plain"), "plain", "");
    write_crate(
        &root.join("app"),
        "app",
        "\n[dependencies]\nhelper = { path = \"../helper\" }\nplain = { path = \"../plain\" }\n\n[workspace]\n",
    );

    temp
}

#[test]
fn test_directory_resolver_lists_subdirectories_sorted() {
    let project = TestProject::new();
    project.add_dep("zeta", None);
    project.add_dep("alpha", Some("a"));
    project.write_file("deps/README.txt", "not a dependency");

    let deps = DirectoryResolver::new(project.deps_dir()).resolve().unwrap();
    let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn test_directory_resolver_missing_dir_is_empty() {
    let project = TestProject::new();
    let deps = DirectoryResolver::new(project.root().join("vendor"))
        .resolve()
        .unwrap();
    assert!(deps.is_empty());
}

#[test]
fn test_scan_and_load_from_disk() {
    let project = TestProject::new();
    project.add_dep("alpha", Some("Alpha rules\n"));
    project.add_dep("beta", None);
    project.add_dep("gamma", Some("Gamma rules"));

    let store = DiskStore::new();
    let deps = DirectoryResolver::new(project.deps_dir()).resolve().unwrap();
    let found = scan(&deps, None, &store);
    let blocks = load_rules(&found, &store).unwrap();

    assert_eq!(
        blocks,
        vec![
            RuleBlock::new("alpha", "Alpha rules\n"),
            RuleBlock::new("gamma", "Gamma rules"),
        ]
    );
}

#[test]
fn test_scan_filter_drops_packages_without_rules() {
    let project = TestProject::new();
    project.add_dep("alpha", Some("A"));
    project.add_dep("beta", None);

    let deps = DirectoryResolver::new(project.deps_dir()).resolve().unwrap();
    let filter = vec!["beta".to_string(), "alpha".to_string()];
    let found = scan(&deps, Some(filter.as_slice()), &DiskStore::new());

    let names: Vec<_> = found.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["alpha"]);
}

#[test]
fn test_project_config_defaults_without_file() {
    let project = TestProject::new();
    let config = ProjectConfig::load(&NormalizedPath::new(project.root())).unwrap();
    assert_eq!(config, ProjectConfig::default());
}

#[test]
fn test_project_config_directory_source() {
    let project = TestProject::new();
    project.add_dep("alpha", Some("A"));
    project.write_file("usage-rules.toml", "[deps]\nsource = \"directory\"\ndir = \"deps\"\n");

    let root = NormalizedPath::new(project.root());
    let config = ProjectConfig::load(&root).unwrap();
    assert_eq!(config.deps.source, DependencySource::Directory);

    let resolver = resolver_for(&root, &config, &ResolverOverrides::default()).unwrap();
    let deps = resolver.resolve().unwrap();
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].name, "alpha");
}

#[test]
fn test_project_config_rejects_unknown_keys() {
    let project = TestProject::new();
    project.write_file("usage-rules.toml", "[deps]\nsorce = \"cargo\"\n");

    let result = ProjectConfig::load(&NormalizedPath::new(project.root()));
    assert!(result.is_err());
}

#[test]
fn test_cargo_metadata_resolver_lists_path_dependencies() {
    let temp = cargo_fixture();
    let resolver = CargoMetadataResolver::new(temp.path().join("app/Cargo.toml"));

    let deps = resolver.resolve().unwrap();
    let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["helper", "plain"]);

    let store = DiskStore::new();
    let blocks = load_rules(&scan(&deps, None, &store), &store).unwrap();
    assert_eq!(blocks, vec![RuleBlock::new("helper", "Call helper::init first.\n")]);
}

#[test]
fn test_cargo_is_the_default_source() {
    let temp = cargo_fixture();
    let root = NormalizedPath::new(temp.path().join("app"));

    let resolver = resolver_for(&root, &ProjectConfig::default(), &ResolverOverrides::default())
        .unwrap();
    let deps = resolver.resolve().unwrap();
    assert_eq!(deps.len(), 2);
}

#[test]
fn test_cargo_metadata_missing_manifest_is_error() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("Cargo.toml");

    let err = CargoMetadataResolver::new(manifest.as_path()).resolve().unwrap_err();
    match err {
        Error::CargoMetadata { manifest: reported, message } => {
            assert_eq!(reported, NormalizedPath::new(&manifest).to_native());
            assert!(!message.is_empty());
        }
        other => panic!("expected CargoMetadata error, got {other:?}"),
    }
}

#[test]
fn test_cargo_metadata_malformed_manifest_is_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), "[package\nname = ").unwrap();

    let result = CargoMetadataResolver::new(temp.path().join("Cargo.toml")).resolve();
    assert!(matches!(result, Err(Error::CargoMetadata { .. })));
}
