use std::fmt::Write;

use crate::render::Block;

/// One line per block (and per list item), for readable snapshots.
///
/// ```text
/// p: Hello <strong>world</strong>
/// h3 🚀 Building
/// ul
///   0: a
///   1: b
/// hr
/// code code-block-0-3-0 [python] "print('hi')"
/// ```
pub fn outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(p) => {
                let _ = writeln!(out, "p: {}", p.html);
            }
            Block::Heading(h) => match h.emoji {
                Some(emoji) => {
                    let _ = writeln!(out, "h{} {emoji} {}", h.level, h.text);
                }
                None => {
                    let _ = writeln!(out, "h{} {}", h.level, h.text);
                }
            },
            Block::List(list) => {
                out.push_str("ul\n");
                for item in &list.items {
                    let _ = writeln!(out, "  {}: {}", item.indent_level, item.html);
                }
            }
            Block::Separator => out.push_str("hr\n"),
            Block::Code(code) => {
                let copied = if code.copied { " copied" } else { "" };
                let _ = writeln!(
                    out,
                    "code {} [{}]{copied} {:?}",
                    code.id, code.language, code.raw_content
                );
            }
        }
    }
    out
}
