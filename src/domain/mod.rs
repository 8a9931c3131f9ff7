pub mod audiobook;
pub mod document;
pub mod shared;
pub mod translation;
pub mod tts;
