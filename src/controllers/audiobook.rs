use axum::{
    body::{Body, Bytes},
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        audiobook::{AudiobookRequest, AudiobookService, AudiobookServiceApi},
        document::{Document, DocumentInfoResponse},
        shared::{LanguageCode, LanguageOption},
    },
    error::{AppError, AppResult},
};

/// Fields of the audiobook form, as posted by the page
#[derive(Debug, Default)]
pub struct AudiobookForm {
    pub file: Option<Bytes>,
    pub start_page: Option<u32>,
    pub end_page: Option<u32>,
    pub language: Option<String>,
}

impl AudiobookForm {
    /// Read the multipart body. Unknown fields are ignored; blank values count as missing.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = AudiobookForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => form.file = Some(field.bytes().await?),
                "start_page" => form.start_page = parse_page(&name, &field.text().await?)?,
                "end_page" => form.end_page = parse_page(&name, &field.text().await?)?,
                "language" => {
                    let value = field.text().await?;
                    form.language = Some(value).filter(|v| !v.trim().is_empty());
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn language(&self) -> AppResult<LanguageCode> {
        match &self.language {
            Some(value) => value
                .parse::<LanguageCode>()
                .map_err(|e| AppError::BadRequest(e.to_string())),
            None => Ok(LanguageCode::DEFAULT),
        }
    }
}

fn parse_page(field: &str, value: &str) -> AppResult<Option<u32>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be a positive whole number", field)))
}

/// Parse the uploaded PDF off the async workers
async fn parse_document(file: Option<Bytes>) -> AppResult<Document> {
    let bytes = file
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("A PDF file is required".to_string()))?;

    let document = tokio::task::spawn_blocking(move || Document::from_bytes(&bytes))
        .await
        .map_err(|e| AppError::Internal(format!("PDF parsing task failed: {}", e)))??;

    Ok(document)
}

/// Header values must be visible ASCII; anything else is replaced
fn sanitized_header(value: &str) -> Option<HeaderValue> {
    let ascii: String = value
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '?' })
        .collect();
    HeaderValue::from_str(&ascii).ok()
}

pub struct AudiobookController {
    audiobook_service: Arc<AudiobookService>,
}

impl AudiobookController {
    pub fn new(audiobook_service: Arc<AudiobookService>) -> Self {
        Self { audiobook_service }
    }

    /// GET /api/languages - Languages offered by the form
    pub async fn list_languages() -> Json<Vec<LanguageOption>> {
        Json(LanguageCode::ALL.into_iter().map(LanguageOption::from).collect())
    }

    /// POST /api/documents/inspect - Page count and default range of an uploaded PDF
    pub async fn inspect_document(multipart: Multipart) -> AppResult<Json<DocumentInfoResponse>> {
        let form = AudiobookForm::read(multipart).await?;
        let document = parse_document(form.file).await?;

        tracing::info!(page_count = document.page_count(), "PDF uploaded");

        Ok(Json(DocumentInfoResponse::from(&document)))
    }

    /// POST /api/audiobooks - Convert the selected pages into an MP3
    pub async fn generate(
        State(controller): State<Arc<AudiobookController>>,
        multipart: Multipart,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let form = AudiobookForm::read(multipart).await?;
        let language = form.language()?;
        let document = parse_document(form.file).await?;

        let audiobook = controller
            .audiobook_service
            .generate(AudiobookRequest {
                document,
                start_page: form.start_page,
                end_page: form.end_page,
                language,
            })
            .await?;

        // The artifact is deleted when `audiobook` goes out of scope, on every path below
        let audio = audiobook
            .artifact
            .read()
            .await
            .map_err(|e| AppError::Internal(format!("failed to read audio artifact: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"audiobook.mp3\""),
        );
        headers.insert(
            "x-language",
            HeaderValue::from_static(audiobook.language.as_str()),
        );
        headers.insert("x-character-count", HeaderValue::from(audiobook.char_count));
        if let Some(range) = sanitized_header(&audiobook.range.to_string()) {
            headers.insert("x-page-range", range);
        }
        if let Some(warning) = audiobook
            .translation_warning
            .as_deref()
            .and_then(sanitized_header)
        {
            headers.insert("x-translation-warning", warning);
        }

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }
}
