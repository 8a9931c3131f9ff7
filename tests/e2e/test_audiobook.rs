use crate::e2e::helpers;

use helpers::api_client::MultipartForm;
use helpers::fakes::{FakeTranslation, FakeTts};
use helpers::fixtures::TestFixtures;
use helpers::{TestContext, TEST_MAX_UPLOAD_BYTES};
use hyper::StatusCode;
use pdf_audiobook::domain::shared::LanguageCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

fn generate_form(start: &str, end: &str, language: &str) -> MultipartForm {
    MultipartForm::new()
        .pdf(&TestFixtures::three_page_pdf())
        .text("start_page", start)
        .text("end_page", end)
        .text("language", language)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_inspect_an_uploaded_pdf(ctx: &TestContext) {
    let form = MultipartForm::new().pdf(&TestFixtures::three_page_pdf());

    let response = ctx
        .client
        .post_form("/api/documents/inspect", form)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["page_count"], 3);
    assert_eq!(body["start_page"], 1);
    assert_eq!(body["end_page"], 3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_a_file_that_is_not_a_pdf(ctx: &TestContext) {
    let form = MultipartForm::new().pdf(&TestFixtures::not_a_pdf());

    let response = ctx
        .client
        .post_form("/api/documents/inspect", form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unreadable PDF");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_a_file(ctx: &TestContext) {
    let form = MultipartForm::new().text("language", "en");

    let response = ctx
        .client
        .post_form("/api/audiobooks", form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("A PDF file is required");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_an_english_audiobook_without_translation(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("2", "2", "en"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header(
            "content-disposition",
            "attachment; filename=\"audiobook.mp3\"",
        )
        .assert_header("x-language", "en")
        .assert_header("x-page-range", "2-2");
    assert!(response.header("x-translation-warning").is_none());

    // The fake speech provider echoes the text it was given
    let audio = response.text();
    assert!(audio.starts_with("ID3"));
    assert!(audio.contains("Page 2"));
    assert!(!audio.contains("Page 1"));
    assert!(!audio.contains("Page 3"));

    assert!(ctx.translation.calls().is_empty());
    let tts_calls = ctx.tts.calls();
    assert_eq!(tts_calls.len(), 1);
    assert_eq!(tts_calls[0].1, LanguageCode::English);

    let char_count: usize = response
        .header("x-character-count")
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(char_count, tts_calls[0].0.chars().count());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_before_synthesizing(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "3", "fr"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-language", "fr")
        .assert_header("x-page-range", "1-3");
    assert!(response.header("x-translation-warning").is_none());

    let translation_calls = ctx.translation.calls();
    assert_eq!(translation_calls.len(), 1);
    assert_eq!(translation_calls[0].1, LanguageCode::French);
    assert!(translation_calls[0].0.contains("Page 1"));
    assert!(translation_calls[0].0.contains("Page 3"));

    // Synthesis receives the translated text, in the target language
    let tts_calls = ctx.tts.calls();
    assert_eq!(tts_calls.len(), 1);
    assert!(tts_calls[0].0.starts_with("[fr] "));
    assert_eq!(tts_calls[0].1, LanguageCode::French);
    assert!(response.text().contains("[fr] "));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_language_names_from_the_form(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "1", "Hindi"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-language", "hi");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_every_page_in_english(ctx: &TestContext) {
    let form = MultipartForm::new().pdf(&TestFixtures::three_page_pdf());

    let response = ctx
        .client
        .post_form("/api/audiobooks", form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-language", "en")
        .assert_header("x-page-range", "1-3");
    assert!(ctx.translation.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_no_text_for_scanned_pages(ctx: &TestContext) {
    let form = MultipartForm::new()
        .pdf(&TestFixtures::scanned_pdf())
        .text("start_page", "1")
        .text("end_page", "2")
        .text("language", "de");

    let response = ctx
        .client
        .post_form("/api/audiobooks", form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("No text found in selected pages.");

    // Neither provider is contacted when there is nothing to read
    assert!(ctx.translation.calls().is_empty());
    assert!(ctx.tts.calls().is_empty());
    assert_eq!(ctx.leftover_artifacts(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_end_page_before_the_start_page(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("3", "2", "en"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("invalid page range");
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_pages_outside_the_document(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "9", "en"))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("0", "1", "en"))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_numeric_pages(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("one", "2", "en"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("start_page");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_unsupported_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "1", "klingon"))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.translation.calls().is_empty());
    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_oversized_upload(ctx: &TestContext) {
    let form = MultipartForm::new()
        .pdf(&TestFixtures::oversized_pdf(TEST_MAX_UPLOAD_BYTES))
        .text("language", "en");

    let response = ctx
        .client
        .post_form("/api/audiobooks", form)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("Upload too large");
    assert!(ctx.tts.calls().is_empty());
    assert_eq!(ctx.leftover_artifacts(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_leave_audio_files_behind(ctx: &TestContext) {
    for language in ["en", "es", "ta"] {
        let response = ctx
            .client
            .post_form("/api/audiobooks", generate_form("1", "2", language))
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
    }

    assert_eq!(ctx.tts.calls().len(), 3);
    assert_eq!(ctx.leftover_artifacts(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_tag_audiobook_responses_with_a_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "1", "en"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_fall_back_to_the_original_text_when_translation_fails() {
    let ctx = TestContext::with_providers(
        FakeTts::default(),
        FakeTranslation::failing("quota exceeded"),
    )
    .await;

    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "2", "es"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-language", "es")
        .assert_header("x-translation-warning", "Translation failed: quota exceeded");

    // The untranslated text is spoken with the selected language's voice
    let tts_calls = ctx.tts.calls();
    assert_eq!(tts_calls.len(), 1);
    assert!(tts_calls[0].0.contains("Page 1"));
    assert!(!tts_calls[0].0.starts_with("[es]"));
    assert_eq!(tts_calls[0].1, LanguageCode::Spanish);
}

#[tokio::test]
async fn it_should_fail_when_synthesis_fails() {
    let ctx = TestContext::with_providers(
        FakeTts::failing("speech service unreachable"),
        FakeTranslation::default(),
    )
    .await;

    let response = ctx
        .client
        .post_form("/api/audiobooks", generate_form("1", "3", "en"))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("speech service unreachable");
    assert!(response.header("content-disposition").is_none());
    assert_eq!(ctx.leftover_artifacts(), 0);
}
