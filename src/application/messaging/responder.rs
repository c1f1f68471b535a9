//! Responder - maps each incoming message to exactly one reply

use std::sync::Arc;
use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandRegistry, Content, Message};
use crate::domain::traits::PhraseSelector;

/// Handler for messages that match no registered command
pub type DefaultHandler = Box<dyn Fn(&Message, &dyn PhraseSelector) -> String + Send + Sync>;

/// Reply table: named commands plus one default handler
pub struct ResponseTemplates {
    commands: CommandRegistry,
    default: DefaultHandler,
}

impl ResponseTemplates {
    pub fn new<F>(default: F) -> Self
    where
        F: Fn(&Message, &dyn PhraseSelector) -> String + Send + Sync + 'static,
    {
        Self {
            commands: CommandRegistry::new(),
            default: Box::new(default),
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.register(command);
        self
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }
}

/// Stateless responder. Holds only the immutable templates and the phrase selector.
pub struct Responder {
    templates: ResponseTemplates,
    selector: Arc<dyn PhraseSelector>,
}

impl Responder {
    pub fn new(templates: ResponseTemplates, selector: Arc<dyn PhraseSelector>) -> Self {
        Self { templates, selector }
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.templates.commands().all()
    }

    /// Compute the reply for a message. Never fails.
    pub fn handle(&self, message: &Message) -> String {
        if let Content::Command { name, args } = &message.content {
            if let Some(command) = self.templates.commands().find(name) {
                tracing::debug!("Command /{} with {} args", command.name, args.len());
                match command.execute(message) {
                    Ok(reply) => return reply,
                    Err(CommandError::MissingArgs(_)) => {
                        if let Some(usage) = &command.usage {
                            return usage.clone();
                        }
                        tracing::warn!("/{} is missing arguments and has no usage text", command.name);
                    }
                    Err(e) => tracing::warn!("{}", e),
                }
            } else {
                tracing::debug!("No template for /{}, using default reply", name);
            }
        }

        (self.templates.default)(message, self.selector.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messaging::templates::{self, ANALYZE_USAGE, INTRO_PHRASES, MINDMAP_USAGE, WELCOME};
    use crate::domain::entities::User;
    use crate::domain::entities::user::FALLBACK_NAME;
    use crate::infrastructure::random::SeededSelector;

    /// Always picks the same phrase
    struct FixedSelector(usize);

    impl PhraseSelector for FixedSelector {
        fn select(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn responder(index: usize) -> Responder {
        Responder::new(templates::philosophical(), Arc::new(FixedSelector(index)))
    }

    fn command(name: &str, args: &[&str]) -> Message {
        let args = args.iter().map(|a| a.to_string()).collect();
        Message::from_command("100", name, args)
    }

    fn candidates(name: &str) -> Vec<String> {
        INTRO_PHRASES
            .iter()
            .map(|p| format!("{}\n\n{}", p.replace("{name}", name), templates::REFLECTION_BODY))
            .collect()
    }

    #[test]
    fn test_start_returns_welcome() {
        assert_eq!(responder(0).handle(&command("start", &[])), WELCOME);
        // Extra arguments do not change the welcome
        assert_eq!(responder(3).handle(&command("start", &["now"])), WELCOME);
    }

    #[test]
    fn test_help_returns_help() {
        assert_eq!(responder(0).handle(&command("HELP", &[])), templates::HELP);
    }

    #[test]
    fn test_subject_commands_without_args_return_usage() {
        let r = responder(0);
        assert_eq!(r.handle(&command("analyze", &[])), ANALYZE_USAGE);
        assert_eq!(r.handle(&command("mindmap", &[])), MINDMAP_USAGE);
        assert_eq!(r.handle(&command("analyze", &["", "  "])), ANALYZE_USAGE);
    }

    #[test]
    fn test_subject_commands_contain_joined_args() {
        let r = responder(0);

        let reply = r.handle(&command("analyze", &["X"]));
        assert!(reply.contains("X"));
        for header in templates::ANALYSIS_SECTIONS {
            assert!(reply.contains(header));
        }

        let reply = r.handle(&command("analyze", &["الذكاء", "الاصطناعي"]));
        assert!(reply.contains("\"الذكاء الاصطناعي\""));

        let reply = r.handle(&command("mindmap", &["digital", "consciousness"]));
        assert!(reply.contains("digital consciousness"));
        assert_ne!(reply, MINDMAP_USAGE);
    }

    #[test]
    fn test_plain_text_uses_sender_name() {
        let msg = Message::from_text("100", "ما معنى الوعي؟")
            .with_sender(User::new("7").with_first_name("Noor"));

        for index in 0..INTRO_PHRASES.len() {
            let reply = responder(index).handle(&msg);
            assert!(reply.contains("Noor"));
            assert_eq!(reply, candidates("Noor")[index]);
        }
    }

    #[test]
    fn test_plain_text_without_sender_uses_fallback_name() {
        let anonymous = Message::from_text("100", "hello");
        assert!(responder(1).handle(&anonymous).contains(FALLBACK_NAME));

        let unnamed = Message::from_text("100", "hello").with_sender(User::new("7").with_first_name(""));
        assert!(responder(2).handle(&unnamed).contains(FALLBACK_NAME));
    }

    #[test]
    fn test_unknown_command_gets_default_reply() {
        let msg = command("version", &[]).with_sender(User::new("7").with_first_name("Sami"));
        assert_eq!(responder(0).handle(&msg), candidates("Sami")[0]);
    }

    #[test]
    fn test_reply_is_always_a_candidate() {
        let r = Responder::new(templates::philosophical(), Arc::new(SeededSelector::new(7)));
        let msg = Message::from_text("100", "?").with_sender(User::new("7").with_first_name("Ali"));
        let expected = candidates("Ali");

        for _ in 0..50 {
            assert!(expected.contains(&r.handle(&msg)));
        }
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let msg = Message::from_text("100", "?").with_sender(User::new("7").with_first_name("Ali"));
        assert_eq!(responder(99).handle(&msg), candidates("Ali")[3]);
    }

    #[test]
    fn test_missing_args_without_usage_falls_back_to_default() {
        let templates = ResponseTemplates::new(|_, _| "default".to_string())
            .with_command(Command::new("needy")
                .with_handler(|m| Err(CommandError::MissingArgs(m.joined_args()))));
        let r = Responder::new(templates, Arc::new(FixedSelector(0)));

        assert_eq!(r.handle(&command("needy", &[])), "default");
    }

    #[test]
    fn test_command_order_is_registration_order() {
        let names: Vec<String> = responder(0).commands().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["start", "help", "analyze", "mindmap"]);
    }
}
