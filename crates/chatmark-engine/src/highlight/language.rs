use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no highlighting rules for language `{0}`")]
pub struct UnknownLanguage(pub String);

/// Languages with a highlighting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Html,
    Bash,
    Cpp,
    Ruby,
    Go,
    Php,
    Css,
    Sql,
    Json,
    Yaml,
    Markdown,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Html,
        Language::Bash,
        Language::Cpp,
        Language::Ruby,
        Language::Go,
        Language::Php,
        Language::Css,
        Language::Sql,
        Language::Json,
        Language::Yaml,
        Language::Markdown,
    ];

    /// The fence tag that selects this language.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Html => "html",
            Language::Bash => "bash",
            Language::Cpp => "cpp",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Php => "php",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Matches the lower-cased fence tag exactly; aliases such as `js` or
    /// `sh` are not recognised.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == tag)
            .ok_or_else(|| UnknownLanguage(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (i, lang) in Language::ALL.into_iter().enumerate() {
            assert_eq!(lang as usize, i);
        }
    }

    #[test]
    fn unknown_tags_are_errors() {
        assert_eq!(
            "rust".parse::<Language>(),
            Err(UnknownLanguage("rust".into()))
        );
        assert!("js".parse::<Language>().is_err());
        assert!("Python".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn error_message_names_the_tag() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "no highlighting rules for language `cobol`");
    }
}
