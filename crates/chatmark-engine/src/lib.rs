//! # chatmark engine
//!
//! Turns a raw chat message into an ordered sequence of typed blocks:
//! paragraphs, headings, lists, separators and syntax-highlighted code.
//!
//! ```text
//! message ──► fence segmenter ──► code ──► highlighter ─┐
//!                              └► text ──► classifier ──┴► blocks
//!                                           └► inline formatter
//! ```
//!
//! Everything is a pure function of the message, its index in the
//! transcript and the [`RenderOptions`]; copy state is read, never written.

pub mod cache;
pub mod highlight;
pub mod options;
pub mod parsing;
pub mod render;
pub mod snapshot;
pub mod transcript;

pub use cache::RenderCache;
pub use highlight::{Category, CodeToken, Language, highlight, highlight_markup};
pub use options::{ListGrouping, RenderOptions};
pub use parsing::{InlineNode, Segment, segment};
pub use render::{
    Block, BlockId, CodeBlock, CopyState, Heading, ListBlock, ListItem, NoCopies, Paragraph,
    assemble, render_message,
};
pub use transcript::{Author, ChatMessage, RenderedMessage, render_transcript, transcript_html};
