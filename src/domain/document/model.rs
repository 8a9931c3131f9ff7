use super::error::DocumentError;

/// A parsed PDF, read-only for the lifetime of one request
pub struct Document {
    inner: lopdf::Document,
    /// Page numbers as lopdf indexes them, in reading order
    page_numbers: Vec<u32>,
}

impl Document {
    /// Parse an uploaded PDF. Fails for bytes that are not a PDF and for PDFs without pages.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| DocumentError::Unreadable(e.to_string()))?;

        let page_numbers: Vec<u32> = inner.get_pages().into_keys().collect();
        if page_numbers.is_empty() {
            return Err(DocumentError::NoPages);
        }

        Ok(Self {
            inner,
            page_numbers,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_numbers.len() as u32
    }

    /// Raw text of the page at a zero-based index
    pub(crate) fn page_text(&self, index: usize) -> Result<String, lopdf::Error> {
        match self.page_numbers.get(index) {
            Some(page_number) => self.inner.extract_text(&[*page_number]),
            None => Ok(String::new()),
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.page_count())
            .finish()
    }
}

/// Inclusive, 1-based span of pages selected for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Validate `start..=end` against the document. Out-of-range input is rejected, not clamped.
    pub fn new(start: u32, end: u32, page_count: u32) -> Result<Self, DocumentError> {
        if start < 1 {
            return Err(DocumentError::InvalidRange(format!(
                "start page must be at least 1, got {}",
                start
            )));
        }
        if end < start {
            return Err(DocumentError::InvalidRange(format!(
                "end page {} is before start page {}",
                end, start
            )));
        }
        if end > page_count {
            return Err(DocumentError::InvalidRange(format!(
                "end page {} is past the last page ({})",
                end, page_count
            )));
        }
        Ok(Self { start, end })
    }

    /// Every page of the document
    pub fn full(page_count: u32) -> Self {
        Self {
            start: 1,
            end: page_count.max(1),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
