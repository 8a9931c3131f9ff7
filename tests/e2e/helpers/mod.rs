use pdf_audiobook::{
    controllers::{audiobook::AudiobookController, health::ProviderInfo},
    domain::{audiobook::AudiobookService, translation::TranslationService, tts::TtsService},
    infrastructure::http::build_router,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

#[path = "../../../src/domain/document/test_support.rs"]
pub mod pdf_builder;

use api_client::TestClient;
use fakes::{FakeTranslation, FakeTts};

/// Upload limit used by the test server
pub const TEST_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

pub struct TestContext {
    pub client: TestClient,
    pub tts: Arc<FakeTts>,
    pub translation: Arc<FakeTranslation>,
    audio_dir: TempDir,
}

impl TestContext {
    /// Start a server backed by the given fake providers
    pub async fn with_providers(tts: FakeTts, translation: FakeTranslation) -> Self {
        let audio_dir = tempfile::tempdir().expect("Failed to create audio dir");
        let tts = Arc::new(tts);
        let translation = Arc::new(translation);

        let tts_service = Arc::new(TtsService::new(
            tts.clone(),
            audio_dir.path().to_path_buf(),
        ));
        let translation_service = Arc::new(TranslationService::new(translation.clone()));
        let providers = Arc::new(ProviderInfo {
            tts: tts_service.provider(),
            translation: translation_service.provider(),
        });
        let audiobook_service = Arc::new(AudiobookService::new(translation_service, tts_service));
        let controller = Arc::new(AudiobookController::new(audiobook_service));

        let app = build_router(controller, providers, TEST_MAX_UPLOAD_BYTES);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: TestClient::new(&format!("http://{}", addr)),
            tts,
            translation,
            audio_dir,
        }
    }

    pub fn audio_dir(&self) -> &Path {
        self.audio_dir.path()
    }

    /// Audio artifacts still on disk
    pub fn leftover_artifacts(&self) -> usize {
        std::fs::read_dir(self.audio_dir())
            .expect("Failed to read audio dir")
            .count()
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { Self::with_providers(FakeTts::default(), FakeTranslation::default()).await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The audio directory is removed when `audio_dir` drops
        }
    }
}
