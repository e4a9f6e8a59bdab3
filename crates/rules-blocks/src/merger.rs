//! Merging dependency blocks into target file content.

use crate::markers::{block_end, block_start, split_regions, wrapper_close, wrapper_open};
use crate::status::{Status, classify};

/// A dependency's usage rules, ready to be written as a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// Dependency name, used in the markers and the heading.
    pub name: String,
    /// Raw contents of the dependency's `usage-rules.md`. Never trimmed.
    pub content: String,
}

impl RuleBlock {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The block as it appears in the target file.
    ///
    /// # Example
    /// ```
    /// use rules_blocks::RuleBlock;
    ///
    /// let block = RuleBlock::new("foo", "Use foo carefully.");
    /// assert_eq!(
    ///     block.render(),
    ///     "<-- foo-start -->\n## foo usage\nUse foo carefully.\n<-- foo-end -->"
    /// );
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{}\n## {} usage\n{}\n{}",
            block_start(&self.name),
            self.name,
            self.content,
            block_end(&self.name)
        )
    }

    /// How this block's copy in `file_content` compares to its current rules.
    pub fn status_in(&self, file_content: &str) -> Status {
        classify(&self.name, &self.content, file_content)
    }
}

/// Merge `blocks` into `current_content`.
///
/// If `current_content` already has a wrapper region, each block replaces its
/// own earlier copy inside the wrapper or, when it has none, is appended to the
/// end of the wrapper body. Blocks are applied in order, each on top of the
/// previous result, so a repeated name replaces what the earlier one wrote.
///
/// Without a wrapper region, a new one holding all blocks is appended after a
/// single newline (or becomes the whole content if `current_content` is empty).
///
/// Text outside the wrapper, and blocks not named in `blocks`, are kept byte
/// for byte. An empty `blocks` slice returns `current_content` unchanged.
pub fn merge(current_content: &str, blocks: &[RuleBlock]) -> String {
    if blocks.is_empty() {
        return current_content.to_string();
    }

    let open = wrapper_open();
    let close = wrapper_close();

    match split_regions(current_content, &open, &close) {
        Some(wrapper) => {
            let body = blocks
                .iter()
                .fold(wrapper.body.to_string(), |body, block| upsert(&body, block));
            format!(
                "{}{}{}{}{}",
                wrapper.prelude, open, body, close, wrapper.postlude
            )
        }
        None => {
            tracing::debug!("no wrapper region found, appending a new one");
            let body = blocks
                .iter()
                .map(RuleBlock::render)
                .collect::<Vec<_>>()
                .join("\n");
            let region = format!("{open}{body}{close}");
            if current_content.is_empty() {
                region
            } else {
                format!("{current_content}\n{region}")
            }
        }
    }
}

/// Replace `block`'s copy inside a wrapper body, or append it.
fn upsert(body: &str, block: &RuleBlock) -> String {
    match split_regions(body, &block_start(&block.name), &block_end(&block.name)) {
        Some(regions) => {
            tracing::debug!(name = %block.name, "replacing block in place");
            format!("{}{}{}", regions.prelude, block.render(), regions.postlude)
        }
        None => {
            tracing::debug!(name = %block.name, "appending block");
            format!("{}\n{}", body, block.render())
        }
    }
}
