use crate::domain::document::DocumentError;
use crate::domain::tts::TtsServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudiobookError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("No text found in selected pages.")]
    NoTextFound,
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
    #[error(transparent)]
    Synthesis(#[from] TtsServiceError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AudiobookError> for AppError {
    fn from(err: AudiobookError) -> Self {
        match err {
            AudiobookError::Document(e) => AppError::from(e),
            AudiobookError::NoTextFound => AppError::NoTextFound(err.to_string()),
            AudiobookError::InvalidTransition { .. } => AppError::Internal(err.to_string()),
            AudiobookError::Synthesis(e) => AppError::from(e),
            AudiobookError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
