use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::provider::SpeechCaptureProvider;
use super::settle::{SettleTimer, SETTLE_WINDOW};
use crate::event::{Event, RecognizerSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionState {
    Idle,
    Listening,
    /// The recognizer ended; the settle window is running.
    Finalizing,
}

/// What a lifecycle call or recognizer signal produced, for the
/// orchestrator to surface synchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureUpdate {
    None,
    ListeningChanged(bool),
    /// Advisory partial transcript. Never buffered for dispatch.
    Interim(String),
}

/// One speech capture lifecycle: accumulates final-flagged transcript
/// segments while listening, then coalesces the recognizer's end signals
/// through the settle window into a single finalized utterance.
pub struct CaptureSession {
    state: RecognitionState,
    buffer: Vec<String>,
    settle: SettleTimer,
    events: mpsc::Sender<Event>,
    provider: Box<dyn SpeechCaptureProvider>,
}

impl CaptureSession {
    pub fn new(provider: Box<dyn SpeechCaptureProvider>, events: mpsc::Sender<Event>) -> Self {
        Self {
            state: RecognitionState::Idle,
            buffer: Vec::new(),
            settle: SettleTimer::new(SETTLE_WINDOW),
            events,
            provider,
        }
    }

    pub fn state(&self) -> RecognitionState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == RecognitionState::Listening
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Begin a capture cycle. Silently a no-op when capture is unsupported
    /// or a cycle is already running.
    pub fn start(&mut self) -> CaptureUpdate {
        if !self.provider.is_available() || self.state == RecognitionState::Listening {
            return CaptureUpdate::None;
        }
        if let Err(e) = self.provider.begin() {
            warn!("speech capture failed to start: {e}");
            return CaptureUpdate::None;
        }
        self.buffer.clear();
        self.settle.cancel();
        self.state = RecognitionState::Listening;
        CaptureUpdate::ListeningChanged(true)
    }

    /// End the current cycle. The recognizer follows up with an `Ended`
    /// signal, which starts the settle window. No-op unless listening.
    pub fn stop(&mut self) {
        if self.state != RecognitionState::Listening {
            return;
        }
        self.provider.end();
    }

    pub fn on_signal(&mut self, signal: RecognizerSignal) -> CaptureUpdate {
        match signal {
            RecognizerSignal::Result {
                transcript,
                is_final,
            } => {
                if self.state == RecognitionState::Idle {
                    return CaptureUpdate::None;
                }
                if is_final {
                    let trimmed = transcript.trim();
                    if !trimmed.is_empty() {
                        self.buffer.push(trimmed.to_string());
                    }
                    CaptureUpdate::None
                } else {
                    CaptureUpdate::Interim(transcript)
                }
            }
            RecognizerSignal::Ended => {
                if self.state == RecognitionState::Idle {
                    return CaptureUpdate::None;
                }
                let was_listening = self.state == RecognitionState::Listening;
                self.state = RecognitionState::Finalizing;
                // A second end inside the window re-arms instead of
                // double-dispatching.
                let generation = self.settle.schedule(self.events.clone(), Event::SettleElapsed);
                debug!(generation, "settle window armed");
                if was_listening {
                    CaptureUpdate::ListeningChanged(false)
                } else {
                    CaptureUpdate::None
                }
            }
            RecognizerSignal::Error(message) => {
                warn!("recognition error, dropping capture cycle: {message}");
                let was_listening = self.state == RecognitionState::Listening;
                self.provider.abort();
                self.settle.cancel();
                self.buffer.clear();
                self.state = RecognitionState::Idle;
                if was_listening {
                    CaptureUpdate::ListeningChanged(false)
                } else {
                    CaptureUpdate::None
                }
            }
        }
    }

    /// Settle window elapsed. Returns the finalized utterance when the
    /// generation is current and the buffer holds anything; stale fires
    /// and empty buffers yield nothing.
    pub fn on_settle(&mut self, generation: u64) -> Option<String> {
        if self.state != RecognitionState::Finalizing || !self.settle.is_current(generation) {
            return None;
        }
        self.state = RecognitionState::Idle;
        let text = self.buffer.drain(..).collect::<Vec<_>>().join(" ");
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
