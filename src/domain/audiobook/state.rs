use super::error::AudiobookError;
use crate::domain::document::PageRange;
use crate::domain::shared::LanguageCode;

/// Where a single audiobook request stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    DocumentLoaded {
        page_count: u32,
    },
    RangeSelected {
        page_count: u32,
        range: PageRange,
    },
    LanguageSelected {
        page_count: u32,
        range: PageRange,
        language: LanguageCode,
    },
    Generating {
        range: PageRange,
        language: LanguageCode,
    },
    Succeeded {
        range: PageRange,
        language: LanguageCode,
    },
    Failed {
        reason: String,
    },
}

/// User input that moves a session forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Upload { page_count: u32 },
    SelectRange { start: u32, end: u32 },
    SelectLanguage(LanguageCode),
    Generate,
    Complete,
    Fail(String),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::DocumentLoaded { .. } => "document loaded",
            SessionState::RangeSelected { .. } => "range selected",
            SessionState::LanguageSelected { .. } => "language selected",
            SessionState::Generating { .. } => "generating",
            SessionState::Succeeded { .. } => "succeeded",
            SessionState::Failed { .. } => "failed",
        }
    }

    /// Apply an event, returning the next state.
    ///
    /// Range edits are validated against the uploaded document's page count.
    /// A new upload restarts the session from any state except `Generating`.
    pub fn apply(self, event: SessionEvent) -> Result<SessionState, AudiobookError> {
        use SessionEvent as E;
        use SessionState as S;

        let next = match (self, event) {
            (state @ S::Generating { .. }, event @ E::Upload { .. }) => {
                return Err(invalid(&state, &event));
            }
            (_, E::Upload { page_count }) => S::DocumentLoaded { page_count },

            (
                S::DocumentLoaded { page_count } | S::RangeSelected { page_count, .. },
                E::SelectRange { start, end },
            ) => S::RangeSelected {
                page_count,
                range: PageRange::new(start, end, page_count)?,
            },
            (
                S::LanguageSelected {
                    page_count,
                    language,
                    ..
                },
                E::SelectRange { start, end },
            ) => S::LanguageSelected {
                page_count,
                range: PageRange::new(start, end, page_count)?,
                language,
            },

            (
                S::RangeSelected { page_count, range }
                | S::LanguageSelected {
                    page_count, range, ..
                },
                E::SelectLanguage(language),
            ) => S::LanguageSelected {
                page_count,
                range,
                language,
            },

            (S::LanguageSelected { range, language, .. }, E::Generate) => {
                S::Generating { range, language }
            }
            (S::Generating { range, language }, E::Complete) => S::Succeeded { range, language },
            (S::Generating { .. }, E::Fail(reason)) => S::Failed { reason },

            (state, event) => return Err(invalid(&state, &event)),
        };

        Ok(next)
    }
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Upload { .. } => "upload a document",
            SessionEvent::SelectRange { .. } => "select a page range",
            SessionEvent::SelectLanguage(_) => "select a language",
            SessionEvent::Generate => "generate",
            SessionEvent::Complete => "complete",
            SessionEvent::Fail(_) => "fail",
        }
    }
}

fn invalid(state: &SessionState, event: &SessionEvent) -> AudiobookError {
    AudiobookError::InvalidTransition {
        state: state.name(),
        event: event.name(),
    }
}
