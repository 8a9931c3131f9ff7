use crate::domain::shared::LanguageCode;
use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying provider (Google Translate web endpoint, OpenAI, ...)
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Short provider name, reported by the readiness endpoint
    fn name(&self) -> &'static str;

    /// Translate `text` into `target`, letting the provider detect the source language
    ///
    /// # Errors
    /// Returns a description of the failure (network, quota, unsupported language, ...)
    async fn translate(&self, text: &str, target: LanguageCode) -> Result<String, String>;
}
