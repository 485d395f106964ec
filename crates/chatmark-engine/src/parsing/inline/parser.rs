use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link, Strong},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Code spans are checked first and suppress all other parsing inside them,
/// then bold, then links. Bold contents are parsed again for code spans and
/// links, but bold never nests.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`. Unclosed delimiters are kept
/// as literal text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    parse_with(s, true)
}

fn parse_with(s: &str, allow_strong: bool) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let node = try_parse_code_span(&mut cur)
            .or_else(|| allow_strong.then(|| try_parse_strong(&mut cur)).flatten())
            .or_else(|| try_parse_link(&mut cur));

        if let Some(node) = node {
            flush_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Attempts to parse a non-empty code span starting at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    let len = cur.bump_until(|b| b == CodeSpan::TICK);

    if len == 0 || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner = cur.since(inner_start);
    cur.bump(); // closing `

    Some(InlineNode::Code(inner.to_string()))
}

/// Attempts to parse `**...**` closed on the same line.
///
/// On failure, cursor position is restored.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::MARK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Strong::MARK.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Strong::MARK) && cur.peek() != Some(b'\n') {
        cur.bump();
    }

    if !cur.starts_with(Strong::MARK) {
        *cur = saved;
        return None;
    }
    let inner = cur.since(inner_start);
    cur.bump_n(Strong::MARK.len());

    Some(InlineNode::Strong(parse_with(inner, false)))
}

/// Attempts to parse a `[label](href)` link with non-empty label and href,
/// both on one line.
///
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();
    // Labels stay on one line and never contain another `[`, so every byte
    // is scanned by at most one link attempt.
    let label_len =
        cur.bump_until(|b| b == Link::LABEL_CLOSE || b == Link::LABEL_OPEN || b == b'\n');
    let label = cur.since(label_start);

    if label_len == 0 || cur.bump() != Some(Link::LABEL_CLOSE) || cur.bump() != Some(Link::TARGET_OPEN)
    {
        *cur = saved;
        return None;
    }

    let href_start = cur.pos();
    let href_len =
        cur.bump_until(|b| b == Link::TARGET_CLOSE || b == Link::TARGET_OPEN || b == b'\n');
    let href = cur.since(href_start);

    if href_len == 0 || cur.peek() != Some(Link::TARGET_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link {
        label: label.to_string(),
        href: href.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_bold() {
        assert_eq!(
            parse_inline("Hello **world**"),
            vec![text("Hello "), InlineNode::Strong(vec![text("world")])]
        );
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![
                text("run "),
                InlineNode::Code("cargo test".into()),
                text(" now")
            ]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("see [docs](https://example.com)."),
            vec![
                text("see "),
                InlineNode::Link {
                    label: "docs".into(),
                    href: "https://example.com".into()
                },
                text(".")
            ]
        );
    }

    #[test]
    fn code_span_suppresses_bold_and_links() {
        assert_eq!(
            parse_inline("`**x** [a](b)`"),
            vec![InlineNode::Code("**x** [a](b)".into())]
        );
    }

    #[test]
    fn bold_contents_parse_code_and_links() {
        assert_eq!(
            parse_inline("**use `x` and [y](z)**"),
            vec![InlineNode::Strong(vec![
                text("use "),
                InlineNode::Code("x".into()),
                text(" and "),
                InlineNode::Link {
                    label: "y".into(),
                    href: "z".into()
                },
            ])]
        );
    }

    #[test]
    fn bold_closes_at_first_marker() {
        assert_eq!(
            parse_inline("**a** b **c**"),
            vec![
                InlineNode::Strong(vec![text("a")]),
                text(" b "),
                InlineNode::Strong(vec![text("c")]),
            ]
        );
    }

    #[test]
    fn bold_does_not_cross_lines() {
        assert_eq!(parse_inline("**open\nclose**"), vec![text("**open\nclose**")]);
    }

    #[test]
    fn unclosed_markers_stay_literal() {
        assert_eq!(parse_inline("**unclosed"), vec![text("**unclosed")]);
        assert_eq!(parse_inline("`unclosed"), vec![text("`unclosed")]);
        assert_eq!(parse_inline("[label](open"), vec![text("[label](open")]);
        assert_eq!(parse_inline("[label] (x)"), vec![text("[label] (x)")]);
    }

    #[test]
    fn link_label_stops_at_nested_bracket() {
        assert_eq!(
            parse_inline("[a [b](c)"),
            vec![
                text("[a "),
                InlineNode::Link {
                    label: "b".into(),
                    href: "c".into()
                }
            ]
        );
    }

    #[test]
    fn link_does_not_cross_lines() {
        assert_eq!(parse_inline("[a\nb](c)"), vec![text("[a\nb](c)")]);
        assert_eq!(parse_inline("[a](b\nc)"), vec![text("[a](b\nc)")]);
    }

    #[test]
    fn empty_code_span_is_text() {
        assert_eq!(parse_inline("``"), vec![text("``")]);
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(
            parse_inline("café **naïve** ⸻"),
            vec![
                text("café "),
                InlineNode::Strong(vec![text("naïve")]),
                text(" ⸻")
            ]
        );
    }
}
