use crate::domain::shared::LanguageCode;
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a translation attempt.
///
/// `warning` is set when the provider failed and `text` is the untranslated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub text: String,
    pub warning: Option<String>,
}

impl TranslationOutcome {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            warning: None,
        }
    }
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }

    pub fn provider(&self) -> &'static str {
        self.translation_repo.name()
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text into the target language
    ///
    /// This operation never fails:
    /// - The default language returns the text untouched without calling the provider
    /// - A provider failure is logged and the original text is returned with a warning
    async fn translate(&self, text: &str, target: LanguageCode) -> TranslationOutcome;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(&self, text: &str, target: LanguageCode) -> TranslationOutcome {
        if target.is_default() {
            tracing::debug!(target = %target, "Target is the default language, skipping translation");
            return TranslationOutcome::unchanged(text);
        }

        if text.trim().is_empty() {
            return TranslationOutcome::unchanged(text);
        }

        tracing::info!(
            target = %target,
            provider = self.translation_repo.name(),
            text_length = text.len(),
            "Translating extracted text"
        );

        match self.translation_repo.translate(text, target).await {
            Ok(translated) => TranslationOutcome {
                text: translated,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    target = %target,
                    "Translation failed, falling back to original text"
                );
                TranslationOutcome {
                    text: text.to_string(),
                    warning: Some(format!("Translation failed: {}", e)),
                }
            }
        }
    }
}
