use serde::Serialize;

/// A parsed inline node.
///
/// Nodes own their text; the inline formatter only ever sees one paragraph
/// or list item at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**bold**` text. Children may contain code spans and links but never
    /// another `Strong`.
    Strong(Vec<InlineNode>),
    /// A `[label](href)` link.
    Link { label: String, href: String },
    /// A backtick code span. This is a "raw zone" - no parsing inside.
    Code(String),
}

/// Concatenates the text a reader would see, with all delimiters removed.
pub fn visible_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    push_visible(nodes, &mut out);
    out
}

fn push_visible(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(t) | InlineNode::Code(t) => out.push_str(t),
            InlineNode::Link { label, .. } => out.push_str(label),
            InlineNode::Strong(children) => push_visible(children, out),
        }
    }
}
