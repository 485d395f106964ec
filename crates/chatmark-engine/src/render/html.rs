//! Renders a block sequence to an HTML fragment.
//!
//! Block fields already hold escaped markup; only plain string fields
//! (heading text, ids, language tags) are escaped here.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::types::{Block, CodeBlock, ListBlock};

pub const COPIED_MARKER: &str = "Copied!";

/// Renders `blocks` one per line.
pub fn to_html(blocks: &[Block]) -> String {
    blocks.iter().map(block_html).collect::<Vec<_>>().join("\n")
}

pub fn block_html(block: &Block) -> String {
    match block {
        Block::Code(code) => code_block_html(code),
        Block::Heading(h) => {
            let text = encode_text(&h.text);
            match h.emoji {
                Some(emoji) => format!("<h{0}>{emoji} {text}</h{0}>", h.level),
                None => format!("<h{0}>{text}</h{0}>", h.level),
            }
        }
        Block::List(list) => list_html(list),
        Block::Separator => "<hr>".to_string(),
        Block::Paragraph(p) => format!("<p>{}</p>", p.html),
    }
}

fn code_block_html(code: &CodeBlock) -> String {
    let id = code.id.to_string();
    let mut out = format!(
        "<div class=\"code-block\" data-block-id=\"{}\"",
        encode_double_quoted_attribute(&id)
    );
    if !code.language.is_empty() {
        out.push_str(&format!(
            " data-language=\"{}\"",
            encode_double_quoted_attribute(&code.language)
        ));
    }
    out.push_str("><pre><code>");
    out.push_str(&code.highlighted_markup);
    out.push_str("</code></pre>");
    if code.copied {
        out.push_str("<span class=\"copied\">");
        out.push_str(COPIED_MARKER);
        out.push_str("</span>");
    }
    out.push_str("</div>");
    out
}

fn list_html(list: &ListBlock) -> String {
    let mut out = String::from("<ul>");
    for item in &list.items {
        if item.indent_level == 0 {
            out.push_str("<li>");
        } else {
            out.push_str(&format!(
                "<li style=\"padding-left: {}rem\">",
                item.indent_level
            ));
        }
        out.push_str(&item.html);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}
