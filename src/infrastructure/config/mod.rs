use crate::infrastructure::repositories::{DEFAULT_GOOGLE_TRANSLATE_URL, DEFAULT_GOOGLE_TTS_URL};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Providers
    pub tts_provider: Provider,
    pub translation_provider: Provider,
    pub google_tts_url: String,
    pub google_translate_url: String,
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    pub openai_translation_model: String,
    pub http_timeout_secs: u64,
    // Uploads and artifacts
    pub max_upload_bytes: usize,
    pub audio_temp_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Backend used for speech synthesis or translation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    OpenAi,
}

impl Provider {
    fn parse(name: &str, value: &str) -> Result<Self, Box<dyn std::error::Error>> {
        match value.trim().to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "openai" => Ok(Provider::OpenAi),
            other => Err(format!("{} must be 'google' or 'openai', got '{}'", name, other).into()),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            tts_provider: Provider::parse(
                "TTS_PROVIDER",
                &env::var("TTS_PROVIDER").unwrap_or_else(|_| "google".to_string()),
            )?,
            translation_provider: Provider::parse(
                "TRANSLATION_PROVIDER",
                &env::var("TRANSLATION_PROVIDER").unwrap_or_else(|_| "google".to_string()),
            )?,
            google_tts_url: env::var("GOOGLE_TTS_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TTS_URL.to_string()),
            google_translate_url: env::var("GOOGLE_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TRANSLATE_URL.to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_default(),
            openai_translation_model: env::var("OPENAI_TRANSLATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            max_upload_bytes: env::var("MAX_UPLOAD_MB")
                .unwrap_or_else(|_| "50".to_string())
                .parse::<usize>()?
                * 1024
                * 1024,
            audio_temp_dir: env::var("AUDIO_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
        };

        config.validate()?;
        Ok(config)
    }

    /// OpenAI providers cannot start without an API key
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        let uses_openai = self.tts_provider == Provider::OpenAi
            || self.translation_provider == Provider::OpenAi;
        if uses_openai && self.openai_api_key.is_none() {
            return Err("OPENAI_API_KEY is required when a provider is set to 'openai'".into());
        }
        Ok(())
    }
}
