//! HTML serialisation of inline nodes and highlight tokens.
//!
//! Every piece of user text is escaped before it is wrapped in a tag.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    highlight::CodeToken,
    parsing::inline::{InlineNode, kinds::Link},
};

pub const LINK_STYLE: &str =
    "color: #3b82f6; text-decoration: none; border-bottom: 1px solid #3b82f6;";
pub const INLINE_CODE_STYLE: &str = "background: #f1f5f9; padding: 2px 4px; border-radius: 4px; color: #1e293b; font-family: monospace";

/// Serialises inline nodes to HTML.
pub fn inline_html(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    push_inline(nodes, &mut out);
    out
}

fn push_inline(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(t) => out.push_str(&encode_text(t)),
            InlineNode::Strong(children) => {
                out.push_str("<strong>");
                push_inline(children, out);
                out.push_str("</strong>");
            }
            InlineNode::Link { label, href } if Link::is_safe_target(href) => {
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(href));
                out.push_str("\" style=\"");
                out.push_str(LINK_STYLE);
                out.push_str("\">");
                out.push_str(&encode_text(label));
                out.push_str("</a>");
            }
            InlineNode::Link { label, .. } => out.push_str(&encode_text(label)),
            InlineNode::Code(code) => {
                out.push_str("<code style=\"");
                out.push_str(INLINE_CODE_STYLE);
                out.push_str("\">");
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
        }
    }
}

/// Prefixes `html` with each emoji followed by a space.
pub fn decorated(emojis: &[&str], html: &str) -> String {
    let mut out = String::new();
    for emoji in emojis {
        out.push_str(emoji);
        out.push(' ');
    }
    out.push_str(html);
    out
}

/// Serialises highlight tokens to HTML: plain tokens are escaped text, the
/// rest become one colored span each.
pub fn code_html(tokens: &[CodeToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.category {
            None => out.push_str(&encode_text(&token.text)),
            Some(category) => {
                out.push_str("<span style=\"color: ");
                out.push_str(category.color());
                out.push_str("\">");
                out.push_str(&encode_text(&token.text));
                out.push_str("</span>");
            }
        }
    }
    out
}
