//! The per-language highlighting rule table.
//!
//! Patterns have no escape awareness. Earlier categories claim text first,
//! so keywords inside comments and strings stay uncolored.

use std::sync::OnceLock;

use regex::Regex;

use super::{category::Category, language::Language};

const STRINGS: &str = r#""[^"]*"|'[^']*'"#;
const DOUBLE_QUOTED_STRINGS: &str = r#""[^"]*""#;
const C_COMMENTS: &str = r"(?m)//.*$|/\*[\s\S]*?\*/";
const BLOCK_COMMENTS: &str = r"/\*[\s\S]*?\*/";
const HASH_COMMENTS: &str = r"(?m)#.*$";
/// `#` comments that leave a `#!` shebang for the shebang category.
const SHELL_COMMENTS: &str = r"(?m)#(?:[^!\n].*)?$";

/// One category's pattern inside a [`LanguageRule`].
#[derive(Debug)]
pub struct Pattern {
    pub category: Category,
    pub regex: Regex,
    /// Capture group that gets colored; 0 colors the whole match.
    pub group: usize,
}

/// The ordered patterns for one language.
#[derive(Debug)]
pub struct LanguageRule {
    patterns: Vec<Pattern>,
}

impl LanguageRule {
    /// Patterns in claim order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.patterns.iter().map(|p| p.category)
    }

    pub fn for_language(lang: Language) -> &'static LanguageRule {
        static TABLE: OnceLock<[LanguageRule; 14]> = OnceLock::new();
        let table = TABLE.get_or_init(|| Language::ALL.map(build));
        // `Language::ALL` lists the variants in declaration order.
        &table[lang as usize]
    }

    /// Strings only; used for languages without a rule of their own.
    pub fn fallback() -> &'static LanguageRule {
        static FALLBACK: OnceLock<LanguageRule> = OnceLock::new();
        FALLBACK.get_or_init(|| RuleBuilder::default().strings(STRINGS).build())
    }
}

#[derive(Default)]
struct RuleBuilder {
    patterns: Vec<Pattern>,
}

impl RuleBuilder {
    fn add(mut self, category: Category, pattern: &str, group: usize) -> Self {
        let regex = Regex::new(pattern).expect("Invalid highlighting regex");
        self.patterns.push(Pattern {
            category,
            regex,
            group,
        });
        self
    }

    fn comments(self, pattern: &str) -> Self {
        self.add(Category::Comment, pattern, 0)
    }

    fn strings(self, pattern: &str) -> Self {
        self.add(Category::String, pattern, 0)
    }

    fn keywords(self, words: &[&str]) -> Self {
        self.add(Category::Keyword, &word_pattern(words), 0)
    }

    fn variables(self, pattern: &str, group: usize) -> Self {
        self.add(Category::Variable, pattern, group)
    }

    fn build(mut self) -> LanguageRule {
        self.patterns.sort_by_key(|p| p.category.precedence());
        LanguageRule {
            patterns: self.patterns,
        }
    }
}

fn word_pattern(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

fn build(lang: Language) -> LanguageRule {
    let rule = RuleBuilder::default();
    match lang {
        Language::Python => rule
            .keywords(&[
                "def", "class", "if", "else", "elif", "for", "while", "return", "import", "from",
                "as", "try", "except", "with", "in", "is", "not", "and", "or", "True", "False",
                "None",
            ])
            .comments(HASH_COMMENTS)
            .variables(r"def\s+(\w+)", 1)
            .strings(STRINGS),
        Language::JavaScript => rule
            .keywords(&[
                "function", "const", "let", "var", "if", "else", "for", "while", "return",
                "import", "export", "from", "as", "try", "catch", "new", "this", "true", "false",
                "null", "undefined",
            ])
            .comments(C_COMMENTS)
            .variables(r"(?:const|let|var)\s+(\w+)", 1)
            .strings(STRINGS),
        Language::Java => rule
            .keywords(&[
                "public",
                "private",
                "protected",
                "class",
                "interface",
                "void",
                "int",
                "double",
                "float",
                "boolean",
                "if",
                "else",
                "for",
                "while",
                "return",
                "new",
                "try",
                "catch",
                "throw",
                "throws",
                "static",
                "final",
                "abstract",
                "synchronized",
            ])
            .comments(C_COMMENTS)
            .variables(r"(?:int|double|float|boolean)\s+(\w+)", 1)
            .strings(STRINGS),
        Language::Html => rule
            .keywords(&[
                "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "a", "img", "ul", "ol",
                "li", "table", "tr", "td", "th", "form", "input", "s", "section", "article",
                "header", "footer", "nav", "main", "aside",
            ])
            .comments(r"<!--[\s\S]*?-->")
            .strings(STRINGS),
        Language::Bash => rule
            .keywords(&[
                "if", "then", "else", "fi", "for", "while", "do", "done", "case", "esac",
                "function", "export", "source", "echo", "read", "set", "unset", "alias",
                "declare", "typeset", "local", "shift", "test", "eval", "exec",
            ])
            .comments(SHELL_COMMENTS)
            .add(Category::Shebang, r"#!/bin/(?:bash|sh)", 0)
            .variables(r"\$[\w@]+|\$\{[\w@]+\}", 0)
            .strings(STRINGS),
        Language::Cpp => rule
            .keywords(&[
                "int",
                "double",
                "float",
                "char",
                "void",
                "class",
                "struct",
                "namespace",
                "public",
                "private",
                "protected",
                "if",
                "else",
                "for",
                "while",
                "return",
                "new",
                "delete",
                "try",
                "catch",
                "throw",
                "using",
                "const",
                "static",
                "virtual",
            ])
            .comments(C_COMMENTS)
            .variables(r"(?:int|double|float|char)\s+(\w+)", 1)
            .strings(STRINGS),
        Language::Ruby => rule
            .keywords(&[
                "def", "class", "module", "if", "else", "elsif", "for", "while", "return",
                "require", "include", "extend", "begin", "rescue", "ensure", "end", "true",
                "false", "nil",
            ])
            .comments(HASH_COMMENTS)
            .variables(r"def\s+(\w+)", 1)
            .strings(STRINGS),
        Language::Go => rule
            .keywords(&[
                "func", "package", "import", "type", "struct", "interface", "if", "else", "for",
                "range", "return", "go", "defer", "chan", "map", "const", "var", "true", "false",
                "nil",
            ])
            .comments(C_COMMENTS)
            .variables(r"(?:var|const)\s+(\w+)", 1)
            .strings(STRINGS),
        Language::Php => rule
            .keywords(&[
                "function",
                "class",
                "if",
                "else",
                "for",
                "while",
                "return",
                "echo",
                "print",
                "new",
                "try",
                "catch",
                "public",
                "private",
                "protected",
                "static",
                "const",
                "global",
                "namespace",
            ])
            .comments(r"(?m)//.*$|/\*[\s\S]*?\*/|#.*$")
            .variables(r"\$(\w+)", 1)
            .strings(STRINGS),
        Language::Css => rule
            .add(
                Category::Property,
                &word_pattern(&[
                    "color",
                    "background",
                    "margin",
                    "padding",
                    "border",
                    "font",
                    "display",
                    "flex",
                    "grid",
                    "position",
                    "width",
                    "height",
                    "top",
                    "right",
                    "bottom",
                    "left",
                ]),
                0,
            )
            .comments(BLOCK_COMMENTS)
            .strings(STRINGS),
        Language::Sql => rule
            .keywords(&[
                "SELECT",
                "FROM",
                "WHERE",
                "INSERT",
                "UPDATE",
                "DELETE",
                "JOIN",
                "LEFT",
                "RIGHT",
                "INNER",
                "OUTER",
                "GROUP",
                "BY",
                "ORDER",
                "HAVING",
                "CREATE",
                "TABLE",
                "INDEX",
                "VIEW",
                "PROCEDURE",
                "FUNCTION",
                "TRIGGER",
                "PRIMARY",
                "FOREIGN",
                "KEY",
            ])
            .comments(r"(?m)--.*$|/\*[\s\S]*?\*/")
            .strings(STRINGS),
        Language::Json => rule.strings(DOUBLE_QUOTED_STRINGS),
        Language::Yaml => rule.comments(HASH_COMMENTS).strings(STRINGS),
        Language::Markdown => rule
            .add(Category::Header, r"(?m)^#{1,6}[ \t]+(.*)$", 1)
            .add(Category::InlineCode, r"`([^`]+)`", 1)
            .add(Category::Link, r"\[([^\]]+)\]\(([^)]+)\)", 1),
    }
    .build()
}
