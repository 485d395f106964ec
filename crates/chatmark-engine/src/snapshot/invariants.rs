use std::collections::HashSet;

use crate::{
    parsing::{
        fence::{Segment, segment},
        inline::visible_text,
    },
    render::Block,
};

/// Validates engine output invariants for `message` and its rendered blocks.
///
/// Asserts that:
/// - Segment spans are in bounds, ordered, non-overlapping
/// - Text segments slice back to exactly their content
/// - Code block ids are unique and raw content matches the fence body
/// - No list or list item is empty, and every paragraph has visible text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(message: &str, blocks: &[Block]) {
    let segments = segment(message);
    let mut last_end = 0;
    for seg in &segments {
        let span = seg.span();
        assert!(
            span.start >= last_end && span.end <= message.len(),
            "segment span out of order or bounds: {span:?} (previous end {last_end}, len {})",
            message.len()
        );
        last_end = span.end;
        if let Segment::Text { content, .. } = seg {
            assert_eq!(span.slice(message), content, "text segment is not lossless");
        }
    }

    let fence_bodies: Vec<&str> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Code { content, .. } => Some(content.as_str()),
            Segment::Text { .. } => None,
        })
        .collect();
    let code_blocks: Vec<_> = blocks.iter().filter_map(Block::as_code).collect();
    assert_eq!(
        code_blocks.len(),
        fence_bodies.len(),
        "one code block per fence"
    );

    let mut ids = HashSet::new();
    for (code, body) in code_blocks.iter().zip(&fence_bodies) {
        assert!(ids.insert(code.id), "duplicate code block id {}", code.id);
        assert_eq!(code.raw_content, *body, "raw content differs from fence body");
        let joined: String = code.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, code.raw_content, "tokens do not cover raw content");
    }

    for block in blocks {
        match block {
            Block::Paragraph(p) => assert!(
                !visible_text(&p.inlines).trim().is_empty(),
                "paragraph without visible text: {:?}",
                p.html
            ),
            Block::List(list) => {
                assert!(!list.items.is_empty(), "empty list");
                for item in &list.items {
                    assert!(!item.html.trim().is_empty(), "empty list item");
                }
            }
            Block::Code(_) | Block::Heading(_) | Block::Separator => {}
        }
    }
}
