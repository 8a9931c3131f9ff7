use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unreadable PDF: {0}")]
    Unreadable(String),
    #[error("the PDF has no pages")]
    NoPages,
    #[error("invalid page range: {0}")]
    InvalidRange(String),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
