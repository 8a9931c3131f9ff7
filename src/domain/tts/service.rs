use super::artifact::AudioArtifact;
use super::error::TtsServiceError;
use crate::domain::shared::LanguageCode;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    artifact_dir: PathBuf,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, artifact_dir: PathBuf) -> Self {
        Self {
            tts_repo,
            artifact_dir,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.tts_repo.name()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech in the given language
    ///
    /// This operation:
    /// - Rejects blank text before calling the provider
    /// - Calls the TTS repository once with the full text
    /// - Writes the MP3 into a fresh temporary artifact
    ///
    /// Provider failures are returned as-is; there is no fallback audio.
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioArtifact, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioArtifact, TtsServiceError> {
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        tracing::info!(
            language = %language,
            provider = self.tts_repo.name(),
            text_length = text.len(),
            "TTS synthesis request"
        );

        let audio_data = self
            .tts_repo
            .synthesize(text, language)
            .await
            .map_err(TtsServiceError::Dependency)?;

        if audio_data.is_empty() {
            return Err(TtsServiceError::Dependency(
                "provider returned no audio".to_string(),
            ));
        }

        let artifact = AudioArtifact::write_in(&self.artifact_dir, &audio_data).await?;
        Ok(artifact)
    }
}
