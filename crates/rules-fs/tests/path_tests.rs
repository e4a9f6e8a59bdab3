//! Tests for NormalizedPath against a real filesystem.

use pretty_assertions::assert_eq;
use rules_fs::{Error, NormalizedPath};
use tempfile::TempDir;

#[test]
fn test_canonicalize_resolves_relative_segments() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("a/b")).unwrap();

    let root = NormalizedPath::new(temp.path()).canonicalize().unwrap();
    let dotted = NormalizedPath::new(temp.path().join("a/b/../..")).canonicalize().unwrap();

    assert_eq!(dotted, root);
    assert!(!root.as_str().contains(".."));
}

#[test]
fn test_canonicalize_missing_path_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = NormalizedPath::new(temp.path().join("nope"));

    let err = missing.canonicalize().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
