//! Error types for the speech capability seams.

/// Speech capture provider failure.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The platform has no speech recognition capability.
    #[error("speech capture is not supported on this platform")]
    Unsupported,

    /// Recognizer-level failure while starting or running a cycle.
    #[error("recognizer error: {0}")]
    Recognizer(String),
}

/// Speech output provider failure.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The platform has no speech synthesis capability.
    #[error("speech output is not supported on this platform")]
    Unsupported,

    /// Synthesis failed. Non-critical path, always swallowed upstream.
    #[error("synthesis error: {0}")]
    Synthesis(String),
}
