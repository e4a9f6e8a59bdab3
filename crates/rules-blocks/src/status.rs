//! Whether a target file's copy of a dependency's rules is current.

use serde::Serialize;

use crate::markers::{block_end, block_start, split_regions};

/// State of one dependency's block in a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The block exists and matches the dependency's rules.
    Present,
    /// The block exists but its content differs.
    Stale,
    /// No well-formed block for the dependency.
    Missing,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Stale => "stale",
            Self::Missing => "missing",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `name`'s block in `file_content` against `rule_content`.
///
/// The text between the block's markers is compared with
/// `"\n## {name} usage\n{rule_content}\n"`, both trimmed of surrounding
/// whitespace. The block is looked up anywhere in the file, not only inside
/// the wrapper region.
///
/// # Example
/// ```
/// use rules_blocks::{Status, classify};
///
/// let file = "<-- foo-start -->\n## foo usage\nv1\n<-- foo-end -->";
/// assert_eq!(classify("foo", "v1", file), Status::Present);
/// assert_eq!(classify("foo", "v2", file), Status::Stale);
/// assert_eq!(classify("bar", "v1", file), Status::Missing);
/// ```
pub fn classify(name: &str, rule_content: &str, file_content: &str) -> Status {
    let expected = format!("\n## {name} usage\n{rule_content}\n");

    match split_regions(file_content, &block_start(name), &block_end(name)) {
        Some(regions) if regions.body.trim() == expected.trim() => Status::Present,
        Some(_) => Status::Stale,
        None => Status::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Present.to_string(), "present");
        assert_eq!(Status::Stale.to_string(), "stale");
        assert_eq!(Status::Missing.to_string(), "missing");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Stale).unwrap(), "\"stale\"");
        assert_eq!(serde_json::to_string(&Status::Present).unwrap(), "\"present\"");
    }

    #[test]
    fn test_classify_ignores_surrounding_whitespace() {
        let file = "<-- foo-start -->\n\n## foo usage\nv1\n\n\n<-- foo-end -->";
        assert_eq!(classify("foo", "v1  \n", file), Status::Present);
    }

    #[test]
    fn test_classify_reversed_markers_still_split() {
        let file = "<-- foo-end -->\n## foo usage\nv1\n<-- foo-start -->";
        assert_eq!(classify("foo", "v1", file), Status::Present);
    }

    #[test]
    fn test_classify_lone_marker_is_missing() {
        let file = "<-- foo-start -->\n## foo usage\nv1\n";
        assert_eq!(classify("foo", "v1", file), Status::Missing);
    }
}
