//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing runs over the text of one paragraph or one list item. It
//! never produces markup directly: the output is a tree of [`InlineNode`]s
//! that `render::markup` escapes and serialises, so user text is never
//! spliced into HTML unescaped.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong, Link, Code)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` parses as a single code
//! span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, visible_text};
