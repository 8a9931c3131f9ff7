pub mod error;
pub mod service;
pub mod state;

pub use error::AudiobookError;
pub use service::{AudiobookService, AudiobookServiceApi};
pub use state::{SessionEvent, SessionState};

use crate::domain::document::{Document, PageRange};
use crate::domain::shared::LanguageCode;
use crate::domain::tts::AudioArtifact;

/// Input of one generation: the uploaded document plus the form selections.
/// Missing page bounds default to the whole document.
#[derive(Debug)]
pub struct AudiobookRequest {
    pub document: Document,
    pub start_page: Option<u32>,
    pub end_page: Option<u32>,
    pub language: LanguageCode,
}

/// A generated audiobook, owned by the request that produced it
#[derive(Debug)]
pub struct Audiobook {
    pub artifact: AudioArtifact,
    pub range: PageRange,
    pub language: LanguageCode,
    pub char_count: usize,
    pub translation_warning: Option<String>,
}
