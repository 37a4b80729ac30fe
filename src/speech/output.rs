use tracing::{debug, warn};

use super::provider::SpeechOutputProvider;

/// Serializes speech synthesis: at most one active utterance, newest wins.
/// There is no queue; a new request cancels whatever is playing.
pub struct OutputChannel {
    provider: Box<dyn SpeechOutputProvider>,
    enabled: bool,
    speaking: bool,
}

impl OutputChannel {
    pub fn new(provider: Box<dyn SpeechOutputProvider>, enabled: bool) -> Self {
        Self {
            provider,
            enabled,
            speaking: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.provider.cancel();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Speak `text`, cancelling whatever is currently playing. Disabled or
    /// unavailable output degrades to a no-op; synthesis failures are
    /// logged and swallowed, the interaction proceeds regardless.
    pub fn speak(&mut self, text: &str) {
        if !self.enabled || !self.provider.is_available() {
            debug!("speech output disabled, dropping utterance");
            return;
        }
        self.provider.cancel();
        if let Err(e) = self.provider.speak(text) {
            warn!("speech synthesis failed: {e}");
        }
    }

    /// Provider reported a synthesis start or end.
    pub fn on_speaking_changed(&mut self, speaking: bool) {
        self.speaking = speaking;
    }
}
