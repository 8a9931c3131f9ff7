pub mod error;
pub mod model;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::DocumentError;
pub use model::{Document, PageRange};
pub use service::TextExtractor;

use serde::{Deserialize, Serialize};

/// Response for POST /api/documents/inspect
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentInfoResponse {
    pub page_count: u32,
    pub start_page: u32,
    pub end_page: u32,
}

impl From<&Document> for DocumentInfoResponse {
    fn from(document: &Document) -> Self {
        let range = PageRange::full(document.page_count());
        Self {
            page_count: document.page_count(),
            start_page: range.start(),
            end_page: range.end(),
        }
    }
}
