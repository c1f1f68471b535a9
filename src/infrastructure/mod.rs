//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Random: Phrase selectors
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod random;
pub mod adapters;
