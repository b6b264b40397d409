//! Error types for the visualizer core
//!
//! The core works on in-memory data that the front-end has already validated, so
//! the taxonomy is small. Out-of-range seeks and `play()` on an exhausted trace are
//! not errors at all; they are clamped or ignored by the [`Player`].
//!
//! [`Player`]: crate::playback::Player

use thiserror::Error;

/// Errors raised by the array factory, the algorithm registry, the player and the
/// command-line front-end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
    /// Requested array size outside the supported range
    #[error("Invalid array size {size}: must be between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// Algorithm identifier not present in the registry
    #[error("Unknown algorithm '{0}' (expected one of: bubble, insertion, quick, merge)")]
    UnknownAlgorithm(String),

    /// Speed setting outside the supported range
    #[error("Invalid speed {speed}: must be between {min} and {max}")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },

    /// A trace was offered to the player while it was running
    #[error("Cannot load a new trace while playback is running")]
    PlaybackRunning,

    /// Malformed command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
