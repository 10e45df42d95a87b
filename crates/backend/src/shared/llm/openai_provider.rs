use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(api_key: String, temperature: f32, max_tokens: u32) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::with_config(config, temperature, max_tokens)
    }

    /// Создать с кастомным endpoint (для совместимых API)
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);
        Self::with_config(config, temperature, max_tokens)
    }

    fn with_config(config: OpenAIConfig, temperature: f32, max_tokens: u32) -> Self {
        Self {
            client: Client::with_config(config),
            temperature,
            max_tokens,
        }
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| -> Result<ChatCompletionRequestMessage, LlmError> {
                let converted: ChatCompletionRequestMessage = match msg.role {
                    ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                    ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                };
                Ok(converted)
            })
            .collect()
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<LlmResponse, LlmError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(Self::convert_messages(messages)?)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("401") || err_str.contains("authentication") {
                LlmError::AuthError(err_str)
            } else if err_str.contains("429") || err_str.contains("rate limit") {
                LlmError::RateLimitExceeded
            } else {
                LlmError::ApiError(err_str)
            }
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(LlmResponse {
            content,
            tokens_used: response.usage.map(|u| u.total_tokens),
            model: response.model,
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}
