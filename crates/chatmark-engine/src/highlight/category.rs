use serde::Serialize;

/// One class of highlighted token, each with a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Comment,
    Shebang,
    String,
    Keyword,
    Property,
    Variable,
    Header,
    InlineCode,
    Link,
}

impl Category {
    pub const fn color(self) -> &'static str {
        match self {
            Category::Keyword | Category::Property | Category::Header => "#6a0dad",
            Category::Comment | Category::Shebang => "#008000",
            Category::String => "#ff0000",
            Category::Variable => "#87ceeb",
            Category::InlineCode => "#1e293b",
            Category::Link => "#3b82f6",
        }
    }

    /// Position in the claim order; lower ranks claim text first.
    pub const fn precedence(self) -> u8 {
        match self {
            Category::Comment => 0,
            Category::Shebang => 1,
            Category::String => 2,
            Category::Keyword | Category::Property => 3,
            Category::Variable => 4,
            Category::Header => 5,
            Category::InlineCode => 6,
            Category::Link => 7,
        }
    }
}

/// A run of code text, colored by its category or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeToken {
    pub category: Option<Category>,
    pub text: String,
}

impl CodeToken {
    pub fn new(category: Option<Category>, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, text)
    }
}
