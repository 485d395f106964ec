//! Classifies the prose of a text segment into blocks.
//!
//! Candidates are separated by blank lines and classified independently,
//! first match wins: separator, heading, list, paragraph.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    options::RenderOptions,
    render::{Block, Heading, Paragraph, markup},
};

use super::{
    emoji::EmojiPolicy,
    inline::{parse_inline, visible_text},
    list::{ListBuilder, ListMarker},
};

pub const SEPARATORS: [&str; 2] = ["---", "⸻"];
pub const HEADING_LEVEL: u8 = 3;

/// `**1. Title:**`, with the leading bold marker optional.
fn heading_pattern() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"^(?:\*\*)?[0-9]+\.\s+(.+?):\*\*").expect("Invalid heading regex")
    })
}

/// Splits `text` into blank-line separated candidates, dropping blank ones.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut out = vec![];
    let mut current: Vec<&str> = vec![];

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

/// Classifies every candidate of `text` into blocks, in source order.
pub fn classify(text: &str, options: &RenderOptions) -> Vec<Block> {
    let mut out = vec![];
    for candidate in paragraphs(text) {
        classify_candidate(&candidate, options, &mut out);
    }
    out
}

fn classify_candidate(candidate: &str, options: &RenderOptions, out: &mut Vec<Block>) {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return;
    }

    if SEPARATORS.contains(&trimmed) {
        out.push(Block::Separator);
        return;
    }

    if let Some((title, rest)) = heading(trimmed, options) {
        out.push(Block::Heading(title));
        // Whatever follows the closing marker is classified on its own.
        classify_candidate(rest, options, out);
        return;
    }

    if candidate.lines().any(ListMarker::is_bullet) {
        let mut builder = ListBuilder::new(options.list_grouping);
        for line in candidate.lines() {
            builder.push_line(line);
        }
        out.extend(builder.finish().into_iter().map(Block::List));
        return;
    }

    out.extend(paragraph(trimmed, options));
}

/// Parses a heading at the start of `text`, returning it with the text that
/// follows the closing marker. A title that is blank once markers are
/// removed is not a heading.
fn heading<'a>(text: &'a str, options: &RenderOptions) -> Option<(Heading, &'a str)> {
    let caps = heading_pattern().captures(text)?;
    let title = caps.get(1)?.as_str().replace("**", "").trim().to_string();
    if title.is_empty() {
        return None;
    }
    let emoji = if options.emoji_decorations {
        EmojiPolicy::FirstMatch.decorations(&title).first().copied()
    } else {
        None
    };
    let rest = &text[caps.get(0)?.end()..];
    Some((
        Heading {
            level: HEADING_LEVEL,
            emoji,
            text: title,
        },
        rest,
    ))
}

/// A paragraph block, or nothing when no visible text remains.
fn paragraph(text: &str, options: &RenderOptions) -> Option<Block> {
    let inlines = parse_inline(text);
    let visible = visible_text(&inlines);
    if visible.trim().is_empty() {
        return None;
    }
    let emojis = if options.emoji_decorations {
        EmojiPolicy::AllMatches.decorations(&visible)
    } else {
        vec![]
    };
    let html = markup::decorated(&emojis, &markup::inline_html(&inlines));
    Some(Block::Paragraph(Paragraph {
        emojis,
        inlines,
        html,
    }))
}
