//! Integration tests for status classification.

use rstest::rstest;
use rules_blocks::{Status, classify};

const FILE: &str = "intro
<-- package-rules-start -->
<-- foo-start -->
## foo usage
Use foo carefully.
<-- foo-end -->
<-- package-rules-end -->
";

#[rstest]
#[case::exact("Use foo carefully.", Status::Present)]
#[case::trailing_newline("Use foo carefully.\n", Status::Present)]
#[case::extra_whitespace("Use foo carefully.\n\n   ", Status::Present)]
#[case::different_text("Use foo boldly.", Status::Stale)]
#[case::empty_rules("", Status::Stale)]
fn test_classify_foo(#[case] rules: &str, #[case] expected: Status) {
    assert_eq!(classify("foo", rules, FILE), expected);
}

#[test]
fn test_classify_missing_without_markers() {
    assert_eq!(classify("bar", "anything", FILE), Status::Missing);
    assert_eq!(classify("foo", "anything", ""), Status::Missing);
}

#[test]
fn test_classify_trim_insensitive_body() {
    let file = "<-- foo-start -->\n\n\n## foo usage\nv1\n\n\n<-- foo-end -->";
    assert_eq!(classify("foo", "v1", file), Status::Present);
}

#[test]
fn test_classify_block_outside_wrapper_still_counts() {
    let file = "<-- foo-start -->\n## foo usage\nv1\n<-- foo-end -->";
    assert_eq!(classify("foo", "v1", file), Status::Present);
}

#[test]
fn test_classify_duplicate_blocks_are_missing() {
    let block = "<-- foo-start -->\n## foo usage\nv1\n<-- foo-end -->";
    let file = format!("{block}\n{block}");
    assert_eq!(classify("foo", "v1", &file), Status::Missing);
}

#[test]
fn test_classify_wrong_heading_is_stale() {
    let file = "<-- foo-start -->\n## bar usage\nv1\n<-- foo-end -->";
    assert_eq!(classify("foo", "v1", file), Status::Stale);
}
