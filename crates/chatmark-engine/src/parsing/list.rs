//! List line recognition and grouping into [`ListBlock`]s.

use crate::{
    options::ListGrouping,
    render::{ListBlock, ListItem, markup},
};

use super::inline::parse_inline;

pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "* ";
    /// Columns a tab counts for when measuring indentation.
    pub const TAB_WIDTH: usize = 2;
    /// Columns per indent level.
    pub const LEVEL_WIDTH: usize = 2;

    /// Whether `line` is a bullet line: optional indentation, then `* `.
    pub fn is_bullet(line: &str) -> bool {
        line.trim_start().starts_with(Self::BULLET)
    }

    /// Indent level of `line` from its leading whitespace.
    pub fn indent_level(line: &str) -> usize {
        let width: usize = line
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();
        width / Self::LEVEL_WIDTH
    }

    /// The item text of `line`: indentation and bullet removed, trimmed.
    pub fn item_text(line: &str) -> &str {
        let rest = line.trim_start();
        rest.strip_prefix(Self::BULLET).unwrap_or(rest).trim()
    }
}

/// Collects list items and emits list blocks according to a
/// [`ListGrouping`] policy.
pub struct ListBuilder {
    grouping: ListGrouping,
    current: Vec<ListItem>,
    saw_indented: bool,
    out: Vec<ListBlock>,
}

impl ListBuilder {
    pub fn new(grouping: ListGrouping) -> Self {
        Self {
            grouping,
            current: vec![],
            saw_indented: false,
            out: vec![],
        }
    }

    /// Adds one source line. Blank lines and bullets without text are skipped.
    pub fn push_line(&mut self, line: &str) {
        let text = ListMarker::item_text(line);
        if text.is_empty() {
            return;
        }
        let inlines = parse_inline(text);
        let html = markup::inline_html(&inlines);
        self.push(ListItem {
            indent_level: ListMarker::indent_level(line),
            inlines,
            html,
        });
    }

    pub fn push(&mut self, item: ListItem) {
        if self.grouping == ListGrouping::SplitOnReturnToRoot
            && item.indent_level == 0
            && self.saw_indented
        {
            self.flush();
        }
        if item.indent_level > 0 {
            self.saw_indented = true;
        }
        self.current.push(item);
    }

    pub fn finish(mut self) -> Vec<ListBlock> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        self.saw_indented = false;
        if self.current.is_empty() {
            return;
        }
        self.out.push(ListBlock {
            items: std::mem::take(&mut self.current),
        });
    }
}
