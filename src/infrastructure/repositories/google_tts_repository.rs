use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;

/// The Google Translate speech endpoint rejects requests over 100 characters
const MAX_BATCH_SIZE: usize = 100;

pub const DEFAULT_GOOGLE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Google Translate TTS implementation of TTS repository
pub struct GoogleTtsRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTtsRepository {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Call the speech endpoint for a single text batch
    async fn call_google(
        &self,
        text: &str,
        language: LanguageCode,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        tracing::debug!(
            language = %language,
            batch_index = index,
            text_length = text.len(),
            "Calling Google TTS"
        );

        let total = total.to_string();
        let index = index.to_string();
        let text_len = text.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.as_str()),
                ("q", text),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", text_len.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %language, "Google TTS request failed");
                format!("Google TTS error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                language = %language,
                "Google TTS returned an error status"
            );
            return Err(format!("Google TTS error: status {}", status));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read Google TTS audio: {}", e))?;

        Ok(audio.to_vec())
    }

    /// Synthesize multiple text batches and merge the MP3 frames in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language: LanguageCode,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self
                .call_google(batch, language, index, batches.len())
                .await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        if batches.is_empty() {
            return Err("Google TTS error: no text to speak".to_string());
        }

        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            language = %language,
            "Text split into batches"
        );

        let audio_data = self.synthesize_batches(&batches, language).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google",
            language = %language,
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
