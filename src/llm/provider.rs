use async_trait::async_trait;
use crate::errors::ShaderGenError;
use super::types::Message;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the messages and return the first choice's text, or "" when the
    /// response carries none.
    async fn complete(&self, messages: &[Message]) -> Result<String, ShaderGenError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
