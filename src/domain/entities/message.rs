use super::User;
use chrono::{DateTime, Utc};

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Command { name: String, args: Vec<String> },
}

/// An incoming message. Created per inbound event and dropped once answered.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: Option<User>,
    pub content: Content,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, content: Content) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: None,
            content,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn from_text(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(chat_id, Content::Text(text.into()))
    }

    pub fn from_command(chat_id: impl Into<String>, name: impl Into<String>, args: Vec<String>) -> Self {
        Self::new(chat_id, Content::Command { name: name.into(), args })
    }

    pub fn with_sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    /// Helper to set sender as Option
    pub fn with_sender_opt(mut self, user: Option<User>) -> Self {
        self.sender = user;
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Display name of the sender, falling back when the sender is unknown
    pub fn sender_name(&self) -> &str {
        self.sender
            .as_ref()
            .map(User::display_name)
            .unwrap_or(super::user::FALLBACK_NAME)
    }

    /// Command arguments joined with single spaces, empty for plain text
    pub fn joined_args(&self) -> String {
        match &self.content {
            Content::Command { args, .. } => args.join(" "),
            Content::Text(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_metadata() {
        let before = Utc::now();
        let first = Message::from_text("1", "a");
        let second = Message::from_text("1", "a").with_platform("telegram");

        assert_ne!(first.id, second.id);
        assert!(first.timestamp >= before);
        assert_eq!(first.platform, "unknown");
        assert_eq!(second.platform, "telegram");
    }

    #[test]
    fn test_joined_args() {
        let msg = Message::from_command("1", "analyze", vec!["free".to_string(), "will".to_string()]);
        assert_eq!(msg.joined_args(), "free will");
        assert_eq!(Message::from_text("1", "free will").joined_args(), "");
    }
}
