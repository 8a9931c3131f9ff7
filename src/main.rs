use async_openai::{config::OpenAIConfig, Client};
use pdf_audiobook::controllers::{audiobook::AudiobookController, health::ProviderInfo};
use pdf_audiobook::domain::{
    audiobook::AudiobookService, translation::TranslationService, tts::TtsService,
};
use pdf_audiobook::infrastructure::config::{Config, LogFormat, Provider};
use pdf_audiobook::infrastructure::http::{build_router, start_http_server};
use pdf_audiobook::infrastructure::repositories::{
    GoogleTranslateRepository, GoogleTtsRepository, OpenAiTranslationRepository,
    OpenAiTtsRepository, TranslationRepository, TtsRepository,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting PDF Audiobook on {}:{}",
        config.host,
        config.port
    );

    std::fs::create_dir_all(&config.audio_temp_dir)?;
    tracing::info!(dir = %config.audio_temp_dir.display(), "Audio artifact directory ready");

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .user_agent(concat!("pdf-audiobook/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // Only built when a provider needs it; config validation guarantees the key
    let openai_client = config.openai_api_key.as_ref().map(|key| {
        Arc::new(Client::with_config(
            OpenAIConfig::new().with_api_key(key.clone()),
        ))
    });

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (providers selected by configuration)
    tracing::info!("Instantiating repositories...");
    let tts_repo: Arc<dyn TtsRepository> = match (config.tts_provider, &openai_client) {
        (Provider::OpenAi, Some(client)) => Arc::new(OpenAiTtsRepository::new(
            client.clone(),
            config.openai_tts_model.clone(),
            config.openai_tts_voice.clone(),
        )),
        _ => Arc::new(GoogleTtsRepository::new(
            http_client.clone(),
            config.google_tts_url.clone(),
        )),
    };
    let translation_repo: Arc<dyn TranslationRepository> =
        match (config.translation_provider, &openai_client) {
            (Provider::OpenAi, Some(client)) => Arc::new(OpenAiTranslationRepository::new(
                client.clone(),
                config.openai_translation_model.clone(),
            )),
            _ => Arc::new(GoogleTranslateRepository::new(
                http_client.clone(),
                config.google_translate_url.clone(),
            )),
        };

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        config.audio_temp_dir.clone(),
    ));
    let translation_service = Arc::new(TranslationService::new(translation_repo));
    let providers = Arc::new(ProviderInfo {
        tts: tts_service.provider(),
        translation: translation_service.provider(),
    });
    tracing::info!(
        tts = providers.tts,
        translation = providers.translation,
        "Providers configured"
    );
    let audiobook_service = Arc::new(AudiobookService::new(translation_service, tts_service));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let audiobook_controller = Arc::new(AudiobookController::new(audiobook_service));

    // Start HTTP server with all routes
    let app = build_router(audiobook_controller, providers, config.max_upload_bytes);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pdf_audiobook=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pdf_audiobook=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
