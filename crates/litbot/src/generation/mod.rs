//! Prompt construction and response generation

pub mod prompt;
pub mod responder;

pub use prompt::PromptBuilder;
pub use responder::{PlaceholderResponder, ResponseGenerator};
