pub mod google_translate_repository;
pub mod google_tts_repository;
pub mod openai_translation_repository;
pub mod openai_tts_repository;
pub mod text_batches;
pub mod translation_repository;
pub mod tts_repository;

pub use google_translate_repository::{GoogleTranslateRepository, DEFAULT_GOOGLE_TRANSLATE_URL};
pub use google_tts_repository::{GoogleTtsRepository, DEFAULT_GOOGLE_TTS_URL};
pub use openai_translation_repository::OpenAiTranslationRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
