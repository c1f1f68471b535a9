//! Message parser - Parses raw text into structured messages

use crate::domain::entities::{Message, Content, User};

/// Parses incoming text into structured Message objects
pub struct MessageParser {
    command_prefix: String,
    bot_username: Option<String>,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
            bot_username: None,
        }
    }

    /// Only accept `/command@name` addressed to this username
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Parse a text message. Returns None for blank text and for commands addressed to another bot.
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Option<Message> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let content = match self.strip_prefix(&text) {
            Some(cmd_text) => self.parse_command(&text, cmd_text)?,
            None => Content::Text(text.clone()),
        };

        Some(Message::new(chat_id, content).with_sender_opt(sender))
    }

    fn strip_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.strip_prefix('/')
            .or_else(|| {
                if self.command_prefix.is_empty() {
                    None
                } else {
                    text.strip_prefix(self.command_prefix.as_str())
                }
            })
    }

    /// Parse the text following the command prefix
    fn parse_command(&self, text: &str, cmd_text: &str) -> Option<Content> {
        // The name must follow the prefix directly
        if cmd_text.is_empty() || cmd_text.starts_with(char::is_whitespace) {
            return Some(Content::Text(text.to_string()));
        }

        let mut parts = cmd_text.split_whitespace();
        let token = parts.next().unwrap_or("");

        let name = match token.split_once('@') {
            Some((name, target)) => {
                if let Some(own) = &self.bot_username {
                    if !own.eq_ignore_ascii_case(target) {
                        tracing::debug!("Ignoring /{} addressed to @{}", name, target);
                        return None;
                    }
                }
                name
            }
            None => token,
        };

        if name.is_empty() {
            return Some(Content::Text(text.to_string()));
        }

        Some(Content::Command {
            name: name.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }
}
