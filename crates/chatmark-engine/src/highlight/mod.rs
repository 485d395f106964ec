//! # Code Highlighting
//!
//! Turns the body of a fenced code block into colored tokens.
//!
//! ## Modules
//!
//! - **`category`**: `Category` (with its fixed color) and `CodeToken`
//! - **`language`**: the closed `Language` enum parsed from fence tags
//! - **`rules`**: the static per-language pattern table
//! - **`tokenize`**: the claim tokenizer that applies a rule in one pass
//!
//! ## Claim Order
//!
//! comments, shebang, strings, keywords or properties, variable names,
//! markdown headers, markdown inline code, markdown links. Text claimed by an
//! earlier category is never matched by a later one.

pub mod category;
pub mod language;
pub mod rules;
pub mod tokenize;

pub use category::{Category, CodeToken};
pub use language::{Language, UnknownLanguage};
pub use rules::LanguageRule;
pub use tokenize::tokenize;

use crate::{options::RenderOptions, render::markup};

/// Highlights `code` written in the language named by the fence tag.
///
/// Unknown languages and code larger than `options.max_highlight_bytes` come
/// back as a single plain token.
pub fn highlight(code: &str, language: &str, options: &RenderOptions) -> Vec<CodeToken> {
    let rule = match language.parse::<Language>() {
        Ok(lang) => LanguageRule::for_language(lang),
        Err(_) if options.highlight_unknown_strings => LanguageRule::fallback(),
        Err(_) => return plain(code),
    };

    if code.len() > options.max_highlight_bytes {
        log::debug!(
            "skipping highlighting of {} byte {language:?} block (limit {})",
            code.len(),
            options.max_highlight_bytes
        );
        return plain(code);
    }

    tokenize(code, rule)
}

/// [`highlight`] serialised to markup.
pub fn highlight_markup(code: &str, language: &str, options: &RenderOptions) -> String {
    markup::code_html(&highlight(code, language, options))
}

fn plain(code: &str) -> Vec<CodeToken> {
    if code.is_empty() {
        vec![]
    } else {
        vec![CodeToken::plain(code)]
    }
}
