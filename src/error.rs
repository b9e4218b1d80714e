//! Error types for analysis, decoding and audio output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for morph operations.
pub type MorphResult<T> = Result<T, MorphError>;

/// Fatal startup conditions.
///
/// Every variant is raised before the real-time phase begins; once an engine
/// exists nothing can fail.
#[derive(Debug, Error)]
pub enum MorphError {
    /// Input file could not be opened or decoded.
    #[error("couldn't open WAV file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Decoded channel count is neither mono nor stereo.
    #[error("can't handle {channels} channels in {}", path.display())]
    UnsupportedChannelLayout { path: PathBuf, channels: u16 },

    /// Recording decoded to zero samples, so it has no analysis frames.
    #[error("{} contains no samples", path.display())]
    EmptyRecording { path: PathBuf },

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no audio output device found")]
    NoOutputDevice,

    #[error("failed to get audio config: {0}")]
    StreamConfig(String),

    #[error("failed to build audio stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start audio stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    /// Offline render could not write its output.
    #[error("failed to write render output: {0}")]
    Render(#[source] hound::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_file() {
        let err = MorphError::UnsupportedChannelLayout {
            path: PathBuf::from("six.wav"),
            channels: 6,
        };
        assert_eq!(err.to_string(), "can't handle 6 channels in six.wav");

        let err = MorphError::EmptyRecording {
            path: PathBuf::from("silence.wav"),
        };
        assert!(err.to_string().contains("silence.wav"));
    }

    #[test]
    fn test_file_open_keeps_source() {
        use std::error::Error as _;

        let err = MorphError::FileOpen {
            path: PathBuf::from("missing.wav"),
            source: hound::Error::IoError(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("couldn't open WAV file missing.wav"));
    }
}
