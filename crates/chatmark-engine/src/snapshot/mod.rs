//! # Snapshot Testing Support
//!
//! Utilities for testing the engine via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a block sequence as a compact, line-oriented
//!   outline for `insta` snapshots and fixture comparisons
//! - **`invariants`**: Runtime checks for engine correctness (segments are
//!   lossless, code ids unique, no empty paragraphs or lists)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
