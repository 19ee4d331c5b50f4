use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use crate::config::{redact_credentials, AppConfig};
use crate::errors::ShaderGenError;
use super::provider::CompletionProvider;
use super::types::{ChatRequest, Message};

pub struct GroqProvider {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqProvider {
    pub fn new(config: &AppConfig) -> Result<Self, ShaderGenError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ShaderGenError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url: config.completions_url(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String, ShaderGenError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("GROQ_API_KEY is not set, skipping completion request");
            return Err(ShaderGenError::Config("GROQ_API_KEY is not set".into()));
        };

        let body = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        };

        debug!(url = %self.url, model = %self.model, messages = messages.len(), "Sending completion request");

        let resp = self.client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let err = ShaderGenError::from(e);
                error!(error = %err, "Completion request failed");
                err
            })?;

        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            let body = redact_credentials(&raw, &[api_key]);
            error!(status = status.as_u16(), body = %body, "Completion API returned an error");
            return Err(ShaderGenError::Upstream { status: status.as_u16(), body });
        }

        let data: Value = resp.json().await.map_err(|e| {
            let err = ShaderGenError::from(e);
            error!(error = %err, "Failed to read completion response");
            err
        })?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        info!(model = %self.model, chars = content.len(), "Completion received");
        Ok(content)
    }

    fn provider_name(&self) -> &str { "groq" }
    fn model_name(&self) -> &str { &self.model }
}
