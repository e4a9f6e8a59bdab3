use rstest::rstest;
use rules_fs::{ConfigStore, Error, NormalizedPath};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    source: String,
    dir: Option<String>,
}

#[rstest]
#[case("usage-rules.toml", "source = \"directory\"\ndir = \"vendor\"\n")]
#[case("usage-rules.json", r#"{"source": "directory", "dir": "vendor"}"#)]
fn test_load_detects_format(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();

    let loaded: Sample = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(
        loaded,
        Sample {
            source: "directory".into(),
            dir: Some("vendor".into()),
        }
    );
}

#[test]
fn test_load_optional_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("usage-rules.toml"));
    let loaded: Option<Sample> = ConfigStore::new().load_optional(&path).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_malformed_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("usage-rules.toml");
    fs::write(&file_path, "source = [unterminated").unwrap();

    let result: rules_fs::Result<Sample> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("usage-rules.ini");
    fs::write(&file_path, "source=cargo").unwrap();

    let result: rules_fs::Result<Sample> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}
