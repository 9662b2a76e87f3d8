// Conversation engine: dialogue state machine, text rendering and the
// `Conversation` facade used by the terminal loop.

pub mod engine;
pub mod prompts;
pub mod render;
pub mod state;
pub mod tips;

pub use engine::Conversation;
