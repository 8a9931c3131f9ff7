pub mod service;

pub use service::{TranslationOutcome, TranslationService, TranslationServiceApi};
