//! Single-pass claim tokenizer.
//!
//! Each pattern claims byte ranges of the *source* text, never of generated
//! markup. A range claimed by an earlier category cannot be claimed again,
//! so no text is ever wrapped twice.

use std::collections::BTreeMap;

use crate::parsing::span::Span;

use super::{
    category::{Category, CodeToken},
    rules::{LanguageRule, Pattern},
};

/// Non-overlapping claimed ranges, keyed by start offset.
#[derive(Debug, Default)]
struct Claims {
    by_start: BTreeMap<usize, (usize, Category)>,
}

impl Claims {
    /// The end of the claim covering `pos`, if any.
    fn covering(&self, pos: usize) -> Option<usize> {
        self.by_start
            .range(..=pos)
            .next_back()
            .map(|(_, (end, _))| *end)
            .filter(|end| *end > pos)
    }

    fn is_free(&self, span: Span) -> bool {
        // Claims never overlap, so only the last claim starting before
        // `span.end` can reach into `span`.
        self.by_start
            .range(..span.end)
            .next_back()
            .is_none_or(|(&start, &(end, _))| !Span::new(start, end).overlaps(span))
    }

    fn claim(&mut self, src: &str, pattern: &Pattern) {
        let mut pos = 0;
        while pos <= src.len() {
            let Some(caps) = pattern.regex.captures_at(src, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let target = caps.get(pattern.group).unwrap_or(whole);
            let span = Span::new(target.start(), target.end());

            if !span.is_empty() && self.is_free(span) {
                self.by_start.insert(span.start, (span.end, pattern.category));
                pos = if whole.end() > whole.start() {
                    whole.end()
                } else {
                    next_char(src, whole.start())
                };
                continue;
            }

            // Rejected: resume inside the match so shorter candidates that
            // fit between claims are still found, but skip claimed text.
            pos = next_char(src, whole.start());
            if let Some(end) = self.covering(whole.start()) {
                pos = pos.max(end);
            }
        }
    }

    fn into_tokens(self, src: &str) -> Vec<CodeToken> {
        let mut out = vec![];
        let mut last = 0;
        for (start, (end, category)) in self.by_start {
            if start > last {
                out.push(CodeToken::plain(&src[last..start]));
            }
            out.push(CodeToken::new(Some(category), &src[start..end]));
            last = end;
        }
        if last < src.len() {
            out.push(CodeToken::plain(&src[last..]));
        }
        out
    }
}

/// Offset just past the character starting at `i`, or past the end.
fn next_char(s: &str, i: usize) -> usize {
    s[i..].chars().next().map_or(s.len() + 1, |c| i + c.len_utf8())
}

/// Splits `src` into tokens by applying `rule`'s patterns in claim order.
///
/// Concatenating the token texts always reproduces `src`.
pub fn tokenize(src: &str, rule: &LanguageRule) -> Vec<CodeToken> {
    let mut claims = Claims::default();
    for pattern in rule.patterns() {
        claims.claim(src, pattern);
    }
    claims.into_tokens(src)
}
