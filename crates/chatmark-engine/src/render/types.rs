use std::fmt;

use serde::{Serialize, Serializer};

use crate::{highlight::CodeToken, parsing::inline::InlineNode};

/// Identity of a code block, stable across re-renders of the same message.
///
/// Derived only from where the block sits: the message's index in the
/// transcript, the segment index inside the message and the ordinal of the
/// code block among the message's code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId {
    pub message: usize,
    pub segment: usize,
    pub ordinal: usize,
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code-block-{}-{}-{}",
            self.message, self.segment, self.ordinal
        )
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One structural unit of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Code(CodeBlock),
    Heading(Heading),
    List(ListBlock),
    Separator,
    Paragraph(Paragraph),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub id: BlockId,
    /// Lower-cased fence tag, empty when none was given.
    pub language: String,
    /// The fence body exactly as it should be copied.
    pub raw_content: String,
    pub tokens: Vec<CodeToken>,
    pub highlighted_markup: String,
    /// Whether the caller's copy state marks this block as recently copied.
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub emoji: Option<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBlock {
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub indent_level: usize,
    pub inlines: Vec<InlineNode>,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Keyword emoji shown before the text, in display order.
    pub emojis: Vec<&'static str>,
    pub inlines: Vec<InlineNode>,
    /// Inline markup with the emoji prefix applied.
    pub html: String,
}

impl Block {
    pub fn as_code(&self) -> Option<&CodeBlock> {
        match self {
            Block::Code(code) => Some(code),
            _ => None,
        }
    }
}
