//! Splits a message into prose and fenced code segments.

use std::sync::OnceLock;

use regex::Regex;

use super::span::Span;

/// One piece of a message: prose to classify, or a fenced code body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text {
        span: Span,
        content: String,
    },
    Code {
        /// Span of the whole fence, delimiters included.
        span: Span,
        /// Lower-cased fence tag, empty when none was given.
        language: String,
        /// Fence body with surrounding whitespace trimmed.
        content: String,
    },
}

impl Segment {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text { span, .. } | Segment::Code { span, .. } => *span,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Opening backticks, optional tag, newline, shortest body, closing
    /// backticks. The body is lazy so consecutive fences never merge.
    fn pattern() -> &'static Regex {
        static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        FENCE_REGEX.get_or_init(|| {
            Regex::new(r"(?s)```([^\s`]*)[ \t]*\r?\n(.*?)\r?\n?[ \t]*```")
                .expect("Invalid code fence regex")
        })
    }
}

/// Splits `message` into ordered [`Segment`]s.
///
/// A fence without a closing line is not code: it stays in the surrounding
/// text segment. A message without any fence yields exactly one text segment
/// holding the whole message, even when the message is empty.
pub fn segment(message: &str) -> Vec<Segment> {
    let mut out = vec![];
    let mut last = 0;

    for caps in CodeFence::pattern().captures_iter(message) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if whole.start() > last {
            push_text(&mut out, message, Span::new(last, whole.start()));
        }
        out.push(Segment::Code {
            span: Span::new(whole.start(), whole.end()),
            language: caps
                .get(1)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default(),
            content: body.as_str().trim().to_string(),
        });
        last = whole.end();
    }

    if out.is_empty() {
        return vec![Segment::Text {
            span: Span::new(0, message.len()),
            content: message.to_string(),
        }];
    }
    if last < message.len() {
        push_text(&mut out, message, Span::new(last, message.len()));
    }

    log::trace!(
        "segmented message of {} bytes into {} segments",
        message.len(),
        out.len()
    );
    out
}

fn push_text(out: &mut Vec<Segment>, message: &str, span: Span) {
    out.push(Segment::Text {
        span,
        content: span.slice(message).to_string(),
    });
}
