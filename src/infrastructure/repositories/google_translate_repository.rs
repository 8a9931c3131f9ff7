use super::text_batches::{join_batches, split_keeping_separators};
use super::translation_repository::TranslationRepository;
use crate::domain::shared::LanguageCode;
use async_trait::async_trait;
use serde_json::Value;

/// Keeps each form body comfortably under the endpoint's 5000 character limit
const MAX_BATCH_SIZE: usize = 4500;

pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate web endpoint implementation of translation repository
pub struct GoogleTranslateRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateRepository {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    async fn call_google(&self, text: &str, target: LanguageCode) -> Result<String, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.as_str()),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .await
            .map_err(|e| format!("Google Translate error: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Google Translate error: status {}", status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Google Translate returned invalid JSON: {}", e))?;

        parse_translation(&body)
    }
}

/// The endpoint answers `[[["translated", "original", ...], ...], ...]`;
/// the translation is the concatenation of every segment's first element.
fn parse_translation(body: &Value) -> Result<String, String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| "Google Translate returned an unexpected response".to_string())?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err("Google Translate returned an empty translation".to_string());
    }

    Ok(translated)
}

#[async_trait]
impl TranslationRepository for GoogleTranslateRepository {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let batches = split_keeping_separators(text, MAX_BATCH_SIZE);

        let mut translated_batches = Vec::with_capacity(batches.len());
        for batch in &batches {
            translated_batches.push(self.call_google(&batch.text, target).await?);
        }

        tracing::info!(
            provider = "google",
            target = %target,
            batch_count = batches.len(),
            text_length = text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        // Page breaks that fell between batches survive the round trip
        Ok(join_batches(
            translated_batches
                .iter()
                .map(String::as_str)
                .zip(batches.iter()),
        ))
    }
}
