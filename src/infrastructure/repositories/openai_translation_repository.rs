use super::translation_repository::TranslationRepository;
use crate::domain::shared::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat-completion implementation of translation repository
pub struct OpenAiTranslationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTranslationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    fn system_prompt(target: LanguageCode) -> String {
        format!(
            "Translate the user's text into {}. Keep the meaning and paragraph breaks. \
             Reply with the translation only.",
            target.display_name()
        )
    }
}

#[async_trait]
impl TranslationRepository for OpenAiTranslationRepository {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(Self::system_prompt(target))
                    .build()
                    .map_err(|e| format!("OpenAI request error: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(text)
                    .build()
                    .map_err(|e| format!("OpenAI request error: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("OpenAI request error: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI translation call failed");
            format!("OpenAI translation error: {}", e)
        })?;

        let translated = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| "OpenAI returned an empty translation".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            target = %target,
            text_length = text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        Ok(translated)
    }
}
