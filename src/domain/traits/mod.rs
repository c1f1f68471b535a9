//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod selector;

pub use bot::{Bot, BotInfo};
pub use selector::PhraseSelector;
