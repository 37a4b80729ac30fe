/// What a surface does with an utterance no intent rule claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Forward the raw utterance to the conversation session as a chat turn.
    ForwardToChat,
    /// Speak a clarifying apology and drop the utterance.
    SpeakApology,
}

/// How the mic affordance drives the capture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Press toggles listening on and off.
    Tap,
    /// Push-to-talk: press starts, release stops.
    Hold,
}

/// Per-surface voice preferences, mutated only by explicit user toggles.
#[derive(Debug, Clone)]
pub struct VoicePreferences {
    pub voice_output_enabled: bool,
    pub interaction_mode: InteractionMode,
}

#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub fallback: FallbackPolicy,
    pub voice: VoicePreferences,
}

impl SurfaceConfig {
    /// Embedded chat hub: text-first, unmatched speech becomes a chat turn.
    pub fn chat_hub() -> Self {
        Self {
            fallback: FallbackPolicy::ForwardToChat,
            voice: VoicePreferences {
                voice_output_enabled: true,
                interaction_mode: InteractionMode::Tap,
            },
        }
    }

    /// Standalone voice control: voice-first, unmatched speech gets a
    /// spoken apology instead of a network round trip.
    pub fn voice_control() -> Self {
        Self {
            fallback: FallbackPolicy::SpeakApology,
            voice: VoicePreferences {
                voice_output_enabled: true,
                interaction_mode: InteractionMode::Hold,
            },
        }
    }
}
