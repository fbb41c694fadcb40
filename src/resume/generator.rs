use super::prompt::render_resume_prompt;
use crate::{
    GenerationError,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns a free-text description into resume text.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, description: &str) -> Result<String, GenerationError>;
}

/// Generation adapter backed by an [`LlmClient`].
///
/// A generator without a client is the "failed to initialize" state: it
/// answers every request with [`GenerationError::NotInitialized`] and never
/// calls out.
pub struct ResumeGenerator {
    client: Option<Arc<dyn LlmClient>>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl ResumeGenerator {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client: Some(client),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn uninitialized() -> Self {
        Self {
            client: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Builds the generator from configuration, degrading to the
    /// uninitialized state when the client cannot be constructed.
    pub fn from_config(config: &LlmConfig) -> Self {
        match OpenAiClient::new(config.clone()) {
            Ok(client) => {
                info!("LLM client initialized (model: {})", client.model());
                Self::new(Arc::new(client))
                    .with_temperature(config.temperature)
                    .with_max_tokens(config.max_tokens)
            }
            Err(e) => {
                warn!("Failed to initialize LLM client: {}", e);
                Self::uninitialized()
            }
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl Generator for ResumeGenerator {
    async fn generate(&self, description: &str) -> Result<String, GenerationError> {
        let client = self.client.as_ref().ok_or(GenerationError::NotInitialized)?;

        if description.is_empty() {
            return Err(GenerationError::EmptyDescription);
        }

        debug!(
            "Generating resume from a {} byte description",
            description.len()
        );

        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user(render_resume_prompt(description))],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = match client.create_chat_completion(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Resume generation failed: {}", e);
                return Err(e.into());
            }
        };

        match response.first_content() {
            Some(text) => {
                match &response.usage {
                    Some(usage) => info!(
                        "Generated resume of {} bytes ({} prompt + {} completion tokens)",
                        text.len(),
                        usage.prompt_tokens,
                        usage.completion_tokens
                    ),
                    None => info!("Generated resume of {} bytes", text.len()),
                }
                Ok(text.to_string())
            }
            None => {
                warn!("Resume generation returned no choices");
                Err(GenerationError::Upstream(
                    "LLM returned no choices".to_string(),
                ))
            }
        }
    }
}
