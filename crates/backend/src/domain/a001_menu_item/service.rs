use super::content::{build_prompt, parse_generated, simulate, GeneratedContent, SYSTEM_PROMPT};
use crate::shared::llm::{ChatMessage, LlmProvider};
use contracts::domain::a001_menu_item::ItemDetailsResponse;
use contracts::enums::GenerationModel;
use std::sync::Arc;

/// Генерация описания и апсейла для блюда
///
/// With a provider configured the LLM is asked; without one the canned
/// simulation answers. Provider errors and unparsable answers degrade to
/// [`GeneratedContent::fallback`], so generation itself never fails.
#[derive(Clone)]
pub struct ContentService {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ContentService {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    pub fn simulated() -> Self {
        Self::new(None)
    }

    pub fn mode(&self) -> &str {
        self.provider
            .as_ref()
            .map_or("simulation", |p| p.provider_name())
    }

    pub async fn generate(&self, item_name: &str, model: GenerationModel) -> GeneratedContent {
        let Some(provider) = &self.provider else {
            return simulate(item_name, model);
        };

        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(item_name)),
        ];

        match provider.chat_completion(model.code(), messages).await {
            Ok(response) => {
                tracing::debug!(
                    model = %response.model,
                    tokens = ?response.tokens_used,
                    "LLM answered for '{}'",
                    item_name
                );
                parse_generated(&response.content).unwrap_or_else(|| {
                    tracing::warn!("LLM answer is not valid JSON, using fallback");
                    GeneratedContent::fallback(item_name)
                })
            }
            Err(e) => {
                tracing::error!("{} request failed: {}", provider.provider_name(), e);
                GeneratedContent::fallback(item_name)
            }
        }
    }

    /// Собрать полный ответ эндпоинта для уже проверенного имени
    pub async fn item_details(
        &self,
        item_name: String,
        model: GenerationModel,
    ) -> ItemDetailsResponse {
        let content = self.generate(&item_name, model).await;
        ItemDetailsResponse {
            item_name,
            description: content.description,
            upsell_suggestion: content.upsell_suggestion,
            model_used: model.code().to_string(),
            generated_at: chrono::Local::now().to_rfc3339(),
        }
    }
}
