//! # Message Parsing
//!
//! Everything that reads message text.
//!
//! ## Modules
//!
//! - **`span`**: byte ranges into the message
//! - **`fence`**: splits a message into text and fenced code `Segment`s
//! - **`structure`**: classifies text into separators, headings, lists and
//!   paragraphs
//! - **`list`**: bullet line recognition and list grouping
//! - **`inline`**: bold, link and code span parsing
//! - **`emoji`**: keyword emoji table and its two lookup policies

pub mod emoji;
pub mod fence;
pub mod inline;
pub mod list;
pub mod span;
pub mod structure;

pub use emoji::EmojiPolicy;
pub use fence::{Segment, segment};
pub use inline::{InlineNode, parse_inline};
pub use span::Span;
pub use structure::classify;
