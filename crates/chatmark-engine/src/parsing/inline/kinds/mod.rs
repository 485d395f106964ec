//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Strong`**: `MARK = b"**"`
//! - **`Link`**: `[`, `]`, `(`, `)` plus the target scheme filter
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod link;
pub mod strong;

pub use code_span::CodeSpan;
pub use link::Link;
pub use strong::Strong;
