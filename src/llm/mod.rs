pub mod groq;
pub mod provider;
pub mod types;

pub use groq::GroqProvider;
pub use provider::CompletionProvider;
pub use types::{Message, Role};
