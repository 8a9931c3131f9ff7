use super::error::AudiobookError;
use super::state::{SessionEvent, SessionState};
use super::{Audiobook, AudiobookRequest};
use crate::domain::document::TextExtractor;
use crate::domain::translation::{TranslationService, TranslationServiceApi};
use crate::domain::tts::{TtsService, TtsServiceApi};
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;

pub struct AudiobookService {
    extractor: TextExtractor,
    translation_service: Arc<TranslationService>,
    tts_service: Arc<TtsService>,
}

impl AudiobookService {
    pub fn new(translation_service: Arc<TranslationService>, tts_service: Arc<TtsService>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            translation_service,
            tts_service,
        }
    }
}

#[async_trait]
pub trait AudiobookServiceApi: Send + Sync {
    /// Turn the selected pages of a document into an audiobook
    ///
    /// This operation:
    /// - Validates the page range against the document
    /// - Extracts the text of the selected pages
    /// - Stops with `NoTextFound` when the pages carry no text
    /// - Translates the text (falling back to the original on failure)
    /// - Synthesizes the final text into a temporary MP3 artifact
    async fn generate(&self, request: AudiobookRequest) -> Result<Audiobook, AudiobookError>;
}

#[async_trait]
impl AudiobookServiceApi for AudiobookService {
    async fn generate(&self, request: AudiobookRequest) -> Result<Audiobook, AudiobookError> {
        let AudiobookRequest {
            document,
            start_page,
            end_page,
            language,
        } = request;
        let page_count = document.page_count();

        // 1. Drive the session up to Generating; this is where range input is validated
        let state = SessionState::Idle
            .apply(SessionEvent::Upload { page_count })?
            .apply(SessionEvent::SelectRange {
                start: start_page.unwrap_or(1),
                end: end_page.unwrap_or(page_count),
            })?
            .apply(SessionEvent::SelectLanguage(language))?
            .apply(SessionEvent::Generate)?;

        let SessionState::Generating { range, language } = state.clone() else {
            return Err(AudiobookError::InvalidTransition {
                state: state.name(),
                event: SessionEvent::Generate.name(),
            });
        };

        tracing::info!(
            page_count,
            range = %range,
            language = %language,
            "Audiobook generation started"
        );

        // 2. Extract text off the async workers; lopdf parsing is CPU bound
        let extractor = self.extractor;
        let text = tokio::task::spawn_blocking(move || {
            extractor.extract(&document, range.start(), range.end())
        })
        .await
        .context("text extraction task failed")?;

        // 3. Nothing to read aloud: stop before translation and synthesis
        if text.trim().is_empty() {
            let state = state.apply(SessionEvent::Fail(AudiobookError::NoTextFound.to_string()))?;
            tracing::warn!(range = %range, state = state.name(), "No text found in selected pages");
            return Err(AudiobookError::NoTextFound);
        }

        // 4. Translate; failures degrade to the original text with a warning
        let translation = self.translation_service.translate(&text, language).await;

        // 5. Synthesize; failures end the request
        let artifact = match self.tts_service.synthesize(&translation.text, language).await {
            Ok(artifact) => artifact,
            Err(e) => {
                let state = state.apply(SessionEvent::Fail(e.to_string()))?;
                tracing::error!(error = %e, state = state.name(), "Audiobook synthesis failed");
                return Err(e.into());
            }
        };

        let state = state.apply(SessionEvent::Complete)?;
        tracing::info!(
            range = %range,
            language = %language,
            char_count = translation.text.chars().count(),
            audio_size_bytes = artifact.size(),
            translated = translation.warning.is_none() && !language.is_default(),
            state = state.name(),
            "Audiobook generated"
        );

        Ok(Audiobook {
            artifact,
            range,
            language,
            char_count: translation.text.chars().count(),
            translation_warning: translation.warning,
        })
    }
}
