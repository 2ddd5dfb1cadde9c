//! Rule-based chat assistant.

pub mod intents;
pub mod responder;

pub use intents::{classify, Intent};
pub use responder::ChatResponder;
