//! Message handling - parsing inbound text and choosing the reply

pub mod parser;
pub mod responder;
pub mod templates;

pub use parser::MessageParser;
pub use responder::{Responder, ResponseTemplates};
