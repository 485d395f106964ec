//! Rendering of whole chat transcripts.
//!
//! Assistant messages go through the block engine. User messages are shown
//! as typed: split into lines, never parsed, copied as a whole.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    options::RenderOptions,
    render::{Block, CopyState, html, render_message},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message author `{0}` (expected `user` or `assistant`)")]
pub struct UnknownAuthor(pub String);

/// Who wrote a message. Deserialised through [`FromStr`], so transcripts may
/// also say `bot` for the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Author {
    User,
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        })
    }
}

impl FromStr for Author {
    type Err = UnknownAuthor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Author::User),
            "assistant" | "bot" => Ok(Author::Assistant),
            _ => Err(UnknownAuthor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Author {
    type Error = UnknownAuthor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: Author,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "author", rename_all = "snake_case")]
pub enum RenderedMessage {
    User {
        index: usize,
        lines: Vec<String>,
        /// Copy-state key for copying the whole message.
        copy_id: String,
        copied: bool,
    },
    Assistant {
        index: usize,
        blocks: Vec<Block>,
    },
}

/// Copy-state key of a user message.
pub fn user_copy_id(index: usize) -> String {
    format!("user-message-{index}")
}

/// Renders every message of a transcript, in order.
pub fn render_transcript(
    messages: &[ChatMessage],
    copy_state: &impl CopyState,
    options: &RenderOptions,
) -> Vec<RenderedMessage> {
    render_transcript_with(messages, copy_state, |content, index| {
        render_message(content, index, copy_state, options)
    })
}

pub(crate) fn render_transcript_with(
    messages: &[ChatMessage],
    copy_state: &impl CopyState,
    mut render_assistant: impl FnMut(&str, usize) -> Vec<Block>,
) -> Vec<RenderedMessage> {
    messages
        .iter()
        .enumerate()
        .map(|(index, message)| match message.author {
            Author::User => {
                let copy_id = user_copy_id(index);
                RenderedMessage::User {
                    index,
                    lines: message
                        .content
                        .split('\n')
                        .map(|line| line.trim_end_matches('\r').to_string())
                        .collect(),
                    copied: copy_state.is_copied(&copy_id),
                    copy_id,
                }
            }
            Author::Assistant => RenderedMessage::Assistant {
                index,
                blocks: render_assistant(&message.content, index),
            },
        })
        .collect()
}

/// Renders a transcript to HTML, one `<div>` per message.
pub fn transcript_html(messages: &[RenderedMessage]) -> String {
    messages
        .iter()
        .map(|message| match message {
            RenderedMessage::User {
                lines,
                copy_id,
                copied,
                ..
            } => {
                let body = lines
                    .iter()
                    .map(|line| html_escape::encode_text(line).into_owned())
                    .collect::<Vec<_>>()
                    .join("<br>");
                let marker = if *copied {
                    format!("<span class=\"copied\">{}</span>", html::COPIED_MARKER)
                } else {
                    String::new()
                };
                format!(
                    "<div class=\"message user\" data-copy-id=\"{}\">{body}{marker}</div>",
                    html_escape::encode_double_quoted_attribute(copy_id)
                )
            }
            RenderedMessage::Assistant { blocks, .. } => {
                format!(
                    "<div class=\"message assistant\">\n{}\n</div>",
                    html::to_html(blocks)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::render::NoCopies;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_messages_are_not_parsed() {
        let rendered = render_transcript(
            &[ChatMessage::user("**not bold**\n<b>raw</b>")],
            &NoCopies,
            &RenderOptions::default(),
        );
        assert_eq!(
            rendered,
            vec![RenderedMessage::User {
                index: 0,
                lines: vec!["**not bold**".into(), "<b>raw</b>".into()],
                copy_id: "user-message-0".into(),
                copied: false,
            }]
        );
    }

    #[test]
    fn assistant_messages_use_their_transcript_index() {
        let rendered = render_transcript(
            &[
                ChatMessage::user("show me"),
                ChatMessage::assistant("```\nls\n```"),
            ],
            &NoCopies,
            &RenderOptions::default(),
        );
        let RenderedMessage::Assistant { index, blocks } = &rendered[1] else {
            panic!("expected assistant message");
        };
        assert_eq!(*index, 1);
        assert_eq!(
            blocks[0].as_code().map(|c| c.id.to_string()),
            Some("code-block-1-0-0".to_string())
        );
    }

    #[test]
    fn user_copy_state_is_read() {
        let mut state = HashMap::new();
        state.insert(user_copy_id(0), true);
        let rendered = render_transcript(
            &[ChatMessage::user("hi")],
            &state,
            &RenderOptions::default(),
        );
        assert!(matches!(
            rendered[0],
            RenderedMessage::User { copied: true, .. }
        ));
        assert!(transcript_html(&rendered).contains("Copied!"));
    }

    #[test]
    fn user_html_is_escaped_with_line_breaks() {
        let rendered = render_transcript(
            &[ChatMessage::user("a < b\nc")],
            &NoCopies,
            &RenderOptions::default(),
        );
        assert_eq!(
            transcript_html(&rendered),
            "<div class=\"message user\" data-copy-id=\"user-message-0\">a &lt; b<br>c</div>"
        );
    }

    #[test]
    fn authors_parse_from_strings() {
        assert_eq!("User".parse::<Author>(), Ok(Author::User));
        assert_eq!("bot".parse::<Author>(), Ok(Author::Assistant));
        assert!("system".parse::<Author>().is_err());
    }

    #[test]
    fn bot_author_deserializes_as_assistant() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"author":"Bot","content":"hello"}"#).unwrap();
        assert_eq!(message, ChatMessage::assistant("hello"));
    }

    #[test]
    fn unknown_author_is_a_deserialize_error() {
        let err = serde_json::from_str::<ChatMessage>(r#"{"author":"system","content":"x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown message author `system`"));
    }

    #[test]
    fn messages_deserialize_from_json() {
        let messages: Vec<ChatMessage> = serde_json::from_str(
            r#"[{"author":"user","content":"hi"},{"author":"assistant","content":"hello"}]"#,
        )
        .unwrap();
        assert_eq!(
            messages,
            vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")]
        );
    }
}
