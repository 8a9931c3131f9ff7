use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO 639-1 language codes offered by the audiobook form.
///
/// This is the single table shared by the form, the translator and the
/// synthesizer. Anything outside it is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "hi")]
    Hindi,
}

impl LanguageCode {
    /// Every supported language, in the order the form lists them
    pub const ALL: [LanguageCode; 6] = [
        LanguageCode::English,
        LanguageCode::French,
        LanguageCode::Spanish,
        LanguageCode::German,
        LanguageCode::Tamil,
        LanguageCode::Hindi,
    ];

    /// Language of the source documents; selecting it skips translation
    pub const DEFAULT: LanguageCode = LanguageCode::English;

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::French => "fr",
            LanguageCode::Spanish => "es",
            LanguageCode::German => "de",
            LanguageCode::Tamil => "ta",
            LanguageCode::Hindi => "hi",
        }
    }

    /// Human-readable name shown in the language selector
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::French => "French",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::German => "German",
            LanguageCode::Tamil => "Tamil",
            LanguageCode::Hindi => "Hindi",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

/// Accepts either the ISO code ("fr") or the display name ("French"), case-insensitively
impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        LanguageCode::ALL
            .into_iter()
            .find(|language| {
                language.as_str().eq_ignore_ascii_case(needle)
                    || language.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnsupportedLanguage(value.to_string()))
    }
}

/// Entry of GET /api/languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageOption {
    pub name: String,
    pub code: LanguageCode,
    pub default: bool,
}

impl From<LanguageCode> for LanguageOption {
    fn from(language: LanguageCode) -> Self {
        Self {
            name: language.display_name().to_string(),
            code: language,
            default: language.is_default(),
        }
    }
}
