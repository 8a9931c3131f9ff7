use anyhow::Context;
use std::path::Path;
use tempfile::NamedTempFile;

/// Generated MP3 held in a temporary file for the duration of one request.
///
/// The file is removed when the artifact is dropped, whichever way the request ends.
#[derive(Debug)]
pub struct AudioArtifact {
    file: NamedTempFile,
    size: usize,
}

impl AudioArtifact {
    /// Allocate a fresh `audiobook-*.mp3` file in `dir` and write the audio into it
    pub async fn write_in(dir: &Path, audio: &[u8]) -> anyhow::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("audiobook-")
            .suffix(".mp3")
            .tempfile_in(dir)
            .with_context(|| format!("failed to allocate audio artifact in {}", dir.display()))?;

        tokio::fs::write(file.path(), audio)
            .await
            .with_context(|| format!("failed to write audio artifact {}", file.path().display()))?;

        tracing::debug!(
            path = %file.path().display(),
            audio_size_bytes = audio.len(),
            "Audio artifact created"
        );

        Ok(Self {
            file,
            size: audio.len(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Read the whole MP3 back, for playback and download
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.path()).await
    }
}

impl Drop for AudioArtifact {
    fn drop(&mut self) {
        tracing::debug!(path = %self.file.path().display(), "Releasing audio artifact");
    }
}
