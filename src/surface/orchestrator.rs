use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::chat::types::Sender;
use crate::chat::ConversationSession;
use crate::config::{FallbackPolicy, InteractionMode, SurfaceConfig};
use crate::event::Event;
use crate::intent::{self, IntentAction, CAPABILITY_SUMMARY};
use crate::services::chatbot::ChatbotClient;
use crate::speech::capture::{CaptureSession, CaptureUpdate, RecognitionState};
use crate::speech::output::OutputChannel;
use crate::speech::provider::{SpeechCaptureProvider, SpeechOutputProvider};

/// Spoken by the standalone voice surface when no intent matches.
pub const NO_MATCH_APOLOGY: &str =
    "Sorry, I did not catch a command there. Say help to hear what I can do.";

/// Routing collaborator: consumes the path strings intents resolve to.
/// Routing semantics live outside this core.
pub trait NavigationSink: Send {
    fn navigate(&mut self, path: &str);
}

/// Composite view over capture, conversation and output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Idle,
    Listening,
    Thinking,
    Speaking,
}

/// The glue for one interaction surface: decides, per finalized utterance,
/// between the intent fast path (navigate and speak an acknowledgment) and
/// the conversation slow path (network round trip, speak the reply), and
/// drives the speech output channel from either.
pub struct Orchestrator {
    config: SurfaceConfig,
    capture: CaptureSession,
    output: OutputChannel,
    session: ConversationSession,
    navigation: Box<dyn NavigationSink>,
    interim_text: Option<String>,
    visible: bool,
    unread: u32,
}

impl Orchestrator {
    pub fn new(
        config: SurfaceConfig,
        capture_provider: Box<dyn SpeechCaptureProvider>,
        output_provider: Box<dyn SpeechOutputProvider>,
        client: ChatbotClient,
        events: mpsc::Sender<Event>,
        navigation: Box<dyn NavigationSink>,
    ) -> Self {
        let output = OutputChannel::new(output_provider, config.voice.voice_output_enabled);
        Self {
            capture: CaptureSession::new(capture_provider, events),
            output,
            session: ConversationSession::new(client),
            navigation,
            config,
            interim_text: None,
            visible: true,
            unread: 0,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn recognition_state(&self) -> RecognitionState {
        self.capture.state()
    }

    /// Advisory partial transcript for the listening indicator.
    pub fn interim_text(&self) -> Option<&str> {
        self.interim_text.as_deref()
    }

    pub fn unread(&self) -> u32 {
        self.unread
    }

    pub fn state(&self) -> SurfaceState {
        if self.session.is_thinking() {
            SurfaceState::Thinking
        } else if self.capture.is_listening() {
            SurfaceState::Listening
        } else if self.output.is_speaking() {
            SurfaceState::Speaking
        } else {
            SurfaceState::Idle
        }
    }

    /// Activate the conversation surface for the first time (or retry a
    /// failed activation).
    pub async fn open(&mut self) {
        let before = self.session.messages().len();
        self.session.open().await;
        self.note_bot_appends(before);
    }

    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Recognizer(signal) => match self.capture.on_signal(signal) {
                CaptureUpdate::Interim(text) => self.interim_text = Some(text),
                CaptureUpdate::ListeningChanged(listening) => {
                    debug!(listening, "capture state changed");
                    if !listening {
                        self.interim_text = None;
                    }
                }
                CaptureUpdate::None => {}
            },
            Event::SettleElapsed(generation) => {
                if let Some(utterance) = self.capture.on_settle(generation) {
                    self.dispatch_utterance(&utterance).await;
                }
            }
            Event::SpeakingChanged(speaking) => self.output.on_speaking_changed(speaking),
            Event::Typed(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    self.submit_text(text).await;
                }
            }
            Event::MicPressed => self.on_mic_pressed(),
            Event::MicReleased => self.on_mic_released(),
            Event::VisibilityChanged(visible) => self.set_visible(visible),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.unread = 0;
        }
    }

    /// Toggle spoken responses. Conversation state transitions are
    /// identical with voice on or off.
    pub fn set_voice_output(&mut self, enabled: bool) {
        self.config.voice.voice_output_enabled = enabled;
        self.output.set_enabled(enabled);
    }

    /// Intent fast path or conversation slow path, per finalized utterance.
    async fn dispatch_utterance(&mut self, utterance: &str) {
        self.interim_text = None;
        match intent::resolve(utterance) {
            Some(rule) => match &rule.action {
                IntentAction::Navigate {
                    path,
                    acknowledgment,
                } => {
                    info!(intent = rule.name, path, "voice intent matched");
                    self.navigation.navigate(path);
                    self.output.speak(acknowledgment);
                    self.append_command_exchange(utterance, acknowledgment);
                }
                IntentAction::Help => {
                    info!("help intent matched");
                    self.output.speak(CAPABILITY_SUMMARY);
                    self.append_command_exchange(utterance, CAPABILITY_SUMMARY);
                }
            },
            None => match self.config.fallback {
                FallbackPolicy::ForwardToChat => {
                    debug!("no intent matched, forwarding to chat");
                    self.submit_text(utterance).await;
                }
                FallbackPolicy::SpeakApology => {
                    debug!("no intent matched, apologizing");
                    self.output.speak(NO_MATCH_APOLOGY);
                }
            },
        }
    }

    /// One chat turn: send, then speak the reply when there is one.
    async fn submit_text(&mut self, text: &str) {
        let before = self.session.messages().len();
        if let Some(reply) = self.session.send(text).await {
            self.output.speak(&reply);
        }
        self.note_bot_appends(before);
    }

    fn append_command_exchange(&mut self, utterance: &str, spoken: &str) {
        let before = self.session.messages().len();
        self.session
            .append_exchange(&format!("Command: {utterance}"), spoken);
        self.note_bot_appends(before);
    }

    /// Bot messages appended while the surface is hidden count as unread.
    fn note_bot_appends(&mut self, before: usize) {
        if self.visible {
            return;
        }
        let appended = self.session.messages()[before..]
            .iter()
            .filter(|message| message.sender == Sender::Bot)
            .count();
        self.unread += appended as u32;
    }

    /// Tap mode toggles the capture cycle; hold mode is push-to-talk.
    fn on_mic_pressed(&mut self) {
        match self.config.voice.interaction_mode {
            InteractionMode::Tap => {
                if self.capture.is_listening() {
                    self.capture.stop();
                } else {
                    self.capture.start();
                }
            }
            InteractionMode::Hold => {
                self.capture.start();
            }
        }
    }

    fn on_mic_released(&mut self) {
        if self.config.voice.interaction_mode == InteractionMode::Hold {
            self.capture.stop();
        }
    }
}
