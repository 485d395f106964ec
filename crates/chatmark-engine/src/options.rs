use serde::{Deserialize, Serialize};

/// Default cap on the size of a code block that gets highlighted.
pub const DEFAULT_MAX_HIGHLIGHT_BYTES: usize = 64 * 1024;

/// How list lines of one paragraph are grouped into [`ListBlock`]s.
///
/// [`ListBlock`]: crate::render::ListBlock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListGrouping {
    /// Every list line of a paragraph goes into a single list; nesting is
    /// carried by each item's indent level.
    #[default]
    Continuous,
    /// A root-level item that follows indented items closes the current list
    /// and opens a new one.
    SplitOnReturnToRoot,
}

/// Knobs for one rendering pass. Everything here is plain data so options
/// can be part of a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Code blocks larger than this are emitted without highlighting.
    pub max_highlight_bytes: usize,
    /// Prefix headings and paragraphs with keyword emoji.
    pub emoji_decorations: bool,
    pub list_grouping: ListGrouping,
    /// Highlight string literals in code blocks whose language is unknown.
    pub highlight_unknown_strings: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_highlight_bytes: DEFAULT_MAX_HIGHLIGHT_BYTES,
            emoji_decorations: true,
            list_grouping: ListGrouping::default(),
            highlight_unknown_strings: false,
        }
    }
}
