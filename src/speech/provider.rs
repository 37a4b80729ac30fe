use crate::error::{CaptureError, OutputError};

/// Platform speech recognition, reduced to the surface the capture session
/// needs. Adapters deliver recognizer signals through the surface event
/// channel themselves; the session only drives the lifecycle.
pub trait SpeechCaptureProvider: Send {
    fn is_available(&self) -> bool;

    /// Begin a recognition cycle.
    fn begin(&mut self) -> Result<(), CaptureError>;

    /// Request a graceful stop. The recognizer is expected to follow up
    /// with an `Ended` signal once the last results are out.
    fn end(&mut self);

    /// Tear down immediately, discarding any pending results.
    fn abort(&mut self);
}

/// Platform speech synthesis.
pub trait SpeechOutputProvider: Send {
    fn is_available(&self) -> bool;

    /// Synthesize `text`. The caller cancels the current utterance first.
    fn speak(&mut self, text: &str) -> Result<(), OutputError>;

    /// Cancel whatever is queued or playing.
    fn cancel(&mut self);
}

/// Degradation stub for platforms without speech capture. Voice affordances
/// stay disabled; typed input keeps working.
pub struct UnavailableCapture;

impl SpeechCaptureProvider for UnavailableCapture {
    fn is_available(&self) -> bool {
        false
    }

    fn begin(&mut self) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    fn end(&mut self) {}

    fn abort(&mut self) {}
}

/// Degradation stub for platforms without speech synthesis.
pub struct UnavailableOutput;

impl SpeechOutputProvider for UnavailableOutput {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str) -> Result<(), OutputError> {
        Err(OutputError::Unsupported)
    }

    fn cancel(&mut self) {}
}
