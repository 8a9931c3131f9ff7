use super::model::Document;

/// Pulls machine-readable text out of a page span of a [`Document`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of pages `start_page..=end_page` (1-based, inclusive).
    ///
    /// The bounds are clamped to the document again here, so a stray `0` or an end
    /// past the last page never reaches lopdf. Each page that yields text contributes
    /// that text plus a trailing newline; pages without text (scanned images) contribute
    /// nothing. Whitespace-only pages count as pages without text, and trailing whitespace
    /// lopdf leaves on a page is dropped before the newline is added.
    /// An empty string is a valid result the caller has to check.
    pub fn extract(&self, document: &Document, start_page: u32, end_page: u32) -> String {
        let effective_start = start_page.saturating_sub(1) as usize;
        let effective_end = end_page.min(document.page_count()) as usize;

        let mut text = String::new();
        let mut pages_with_text = 0usize;

        for index in effective_start..effective_end {
            let page_text = match document.page_text(index) {
                Ok(page_text) => page_text,
                Err(e) => {
                    tracing::warn!(
                        page = index + 1,
                        error = %e,
                        "Could not decode page content, skipping page"
                    );
                    continue;
                }
            };

            let page_text = page_text.trim_end();
            if page_text.trim().is_empty() {
                tracing::debug!(page = index + 1, "Page has no extractable text");
                continue;
            }

            text.push_str(page_text);
            text.push('\n');
            pages_with_text += 1;
        }

        tracing::info!(
            start_page,
            end_page,
            pages_scanned = effective_end.saturating_sub(effective_start),
            pages_with_text,
            text_length = text.len(),
            "Text extracted from PDF"
        );

        text
    }
}
