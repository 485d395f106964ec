//! # Render Tree Assembly
//!
//! Folds the segments of one message into the final [`Block`] sequence:
//! code segments are highlighted, text segments are classified.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and its variants, `BlockId`
//! - **`markup`**: escaping serialisation of inline nodes and code tokens
//! - **`copy_state`**: the `CopyState` trait over caller-owned copy flags
//! - **`html`**: a block sequence to an HTML fragment
//!
//! The fold is pure. The only counter, the code block ordinal, lives on the
//! stack of one call, so rendering the same message twice gives equal output.

pub mod copy_state;
pub mod html;
pub mod markup;
pub mod types;

pub use copy_state::{CopyState, NoCopies};
pub use types::{Block, BlockId, CodeBlock, Heading, ListBlock, ListItem, Paragraph};

use crate::{
    highlight::highlight,
    options::RenderOptions,
    parsing::{
        fence::{Segment, segment},
        structure::classify,
    },
};

/// Renders one message into blocks, marking code blocks found in
/// `copy_state` as copied.
pub fn render_message(
    message: &str,
    message_index: usize,
    copy_state: &impl CopyState,
    options: &RenderOptions,
) -> Vec<Block> {
    let mut blocks = assemble(message, message_index, options);
    apply_copy_state(&mut blocks, copy_state);
    blocks
}

/// Renders one message into blocks without consulting any copy state.
pub fn assemble(message: &str, message_index: usize, options: &RenderOptions) -> Vec<Block> {
    let mut out = vec![];
    let mut ordinal = 0;

    for (segment_index, seg) in segment(message).into_iter().enumerate() {
        match seg {
            Segment::Code {
                language, content, ..
            } => {
                let id = BlockId {
                    message: message_index,
                    segment: segment_index,
                    ordinal,
                };
                ordinal += 1;
                let tokens = highlight(&content, &language, options);
                let highlighted_markup = markup::code_html(&tokens);
                out.push(Block::Code(CodeBlock {
                    id,
                    language,
                    raw_content: content,
                    tokens,
                    highlighted_markup,
                    copied: false,
                }));
            }
            Segment::Text { content, .. } => out.extend(classify(&content, options)),
        }
    }
    out
}

/// Sets every code block's `copied` flag from `copy_state`.
pub fn apply_copy_state(blocks: &mut [Block], copy_state: &impl CopyState) {
    for block in blocks {
        if let Block::Code(code) = block {
            code.copied = copy_state.is_copied(&code.id.to_string());
        }
    }
}
