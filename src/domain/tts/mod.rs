pub mod artifact;
pub mod error;
pub mod service;

pub use artifact::AudioArtifact;
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};
