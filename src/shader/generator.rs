use std::sync::Arc;
use tracing::{info, warn};
use crate::config::AppConfig;
use crate::errors::ShaderGenError;
use crate::llm::{CompletionProvider, GroqProvider, Message};
use super::prompts::{user_prompt, SYSTEM_PROMPT};
use super::sanitize::strip_code_fences;

/// Turns a natural-language description into GLSL source via a completion provider.
pub struct ShaderGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ShaderGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generator backed by the Groq completion API.
    pub fn from_config(config: &AppConfig) -> Result<Self, ShaderGenError> {
        Ok(Self::new(Arc::new(GroqProvider::new(config)?)))
    }

    pub fn build_messages(prompt: &str) -> Vec<Message> {
        vec![Message::system(SYSTEM_PROMPT), Message::user(&user_prompt(prompt))]
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, ShaderGenError> {
        info!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            prompt_chars = prompt.len(),
            "Generating shader"
        );

        let messages = Self::build_messages(prompt);
        let raw = self.provider.complete(&messages).await?;
        let code = strip_code_fences(&raw);

        if code.is_empty() {
            warn!("Completion contained no shader code");
        } else {
            info!(chars = code.len(), "Shader generated");
        }
        Ok(code)
    }
}
