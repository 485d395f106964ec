//! Keyword driven emoji decorations for headings and paragraphs.
//!
//! The table order is significant: headings take the first keyword found,
//! paragraphs take every keyword found.

/// Keyword to emoji table, in lookup order.
pub const EMOJI_TABLE: &[(&str, &str)] = &[
    ("Building", "🚀"),
    ("Understand", "🎯"),
    ("Focus", "✨"),
    ("Visual", "🎨"),
    ("Color", "🎨"),
    ("Typography", "🔤"),
    ("Imagery", "🖼️"),
    ("Spacing", "📐"),
    ("Consistency", "🎯"),
    ("Animations", "🎬"),
    ("Inspiration", "🛠️"),
    ("Platform", "📱"),
    ("short", "🎯"),
    ("What", "🤔"),
    ("Good", "🎉"),
];

/// How keywords in a piece of text select emoji.
///
/// Headings use `FirstMatch`, paragraphs use `AllMatches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiPolicy {
    /// The emoji of the first table keyword contained in the text.
    FirstMatch,
    /// The emoji of every table keyword contained in the text. Each match is
    /// prepended in table order, so later keywords end up first.
    AllMatches,
}

impl EmojiPolicy {
    /// Returns the emoji to show before `text`, in display order.
    pub fn decorations(self, text: &str) -> Vec<&'static str> {
        let mut matches = EMOJI_TABLE
            .iter()
            .filter(|(keyword, _)| text.contains(keyword))
            .map(|(_, emoji)| *emoji);

        match self {
            EmojiPolicy::FirstMatch => matches.next().into_iter().collect(),
            EmojiPolicy::AllMatches => {
                let mut all: Vec<_> = matches.collect();
                all.reverse();
                all
            }
        }
    }
}
