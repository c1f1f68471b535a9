//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Reply orchestration
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing, reply templates, the responder

pub mod errors;
pub mod services;
pub mod messaging;
