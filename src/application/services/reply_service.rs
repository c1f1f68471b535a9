use crate::application::errors::BotError;
use crate::application::messaging::Responder;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// Answers incoming messages through a bot adapter
pub struct ReplyService<B: Bot> {
    bot: B,
    responder: Responder,
}

impl<B: Bot> ReplyService<B> {
    pub fn new(bot: B, responder: Responder) -> Self {
        Self { bot, responder }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    /// Compute the reply for a message and send it back to the same chat
    pub async fn respond(&self, message: &Message) -> Result<String, BotError> {
        tracing::info!(
            "Processing {} message {} received {}: {:?}",
            message.platform,
            message.id,
            message.timestamp.to_rfc3339(),
            message.content
        );

        let reply = self.responder.handle(message);
        tracing::info!(
            "Sending response to chat_id {}: {}",
            message.chat_id,
            reply.chars().take(100).collect::<String>()
        );

        self.bot.send_message(&message.chat_id, &reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use crate::application::messaging::templates;
    use crate::domain::entities::User;
    use crate::domain::traits::BotInfo;
    use crate::infrastructure::random::SeededSelector;

    /// Records every outgoing message
    #[derive(Default)]
    struct RecordingBot {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn start(&self) -> Result<(), BotError> {
            Ok(())
        }

        async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
            if self.fail {
                return Err(BotError::Network("connection reset".to_string()));
            }
            let mut sent = self.sent.lock().map_err(|_| BotError::Internal("poisoned".to_string()))?;
            sent.push((chat_id.to_string(), text.to_string()));
            Ok(sent.len().to_string())
        }

        fn bot_info(&self) -> BotInfo {
            BotInfo {
                id: "1".to_string(),
                name: "test".to_string(),
                username: "test_bot".to_string(),
            }
        }
    }

    fn service(bot: RecordingBot) -> ReplyService<RecordingBot> {
        let responder = Responder::new(templates::philosophical(), Arc::new(SeededSelector::new(1)));
        ReplyService::new(bot, responder)
    }

    #[tokio::test]
    async fn test_reply_goes_to_the_same_chat() {
        let service = service(RecordingBot::default());
        let msg = Message::from_command("-100123", "start", vec![]);

        let id = service.respond(&msg).await.expect("send");
        assert_eq!(id, "1");

        let sent = service.bot().sent.lock().expect("lock").clone();
        assert_eq!(sent, vec![("-100123".to_string(), templates::WELCOME.to_string())]);
    }

    #[tokio::test]
    async fn test_each_message_is_answered_once() {
        let service = service(RecordingBot::default());
        let user = User::new("5").with_first_name("Maha");

        service.respond(&Message::from_text("5", "hello").with_sender(user.clone())).await.expect("send");
        service.respond(&Message::from_command("5", "analyze", vec![])).await.expect("send");

        let sent = service.bot().sent.lock().expect("lock").clone();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].1.contains("Maha"));
        assert_eq!(sent[1].1, templates::ANALYZE_USAGE);
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let service = service(RecordingBot { fail: true, ..Default::default() });
        let result = service.respond(&Message::from_command("5", "help", vec![])).await;
        assert!(matches!(result, Err(BotError::Network(_))));
    }
}
