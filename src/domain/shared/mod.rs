pub mod language;

pub use language::{LanguageCode, LanguageOption, UnsupportedLanguage};
