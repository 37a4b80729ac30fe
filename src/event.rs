/// Signals delivered by the platform speech recognizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognizerSignal {
    /// A transcript chunk. Interim chunks may still be revised by the
    /// recognizer; only final-flagged chunks are safe to act on.
    Result { transcript: String, is_final: bool },
    /// The recognizer stopped producing results for this cycle.
    /// May fire more than once per logical utterance.
    Ended,
    /// Recognition failed mid-capture. Best-effort input, never fatal.
    Error(String),
}

/// Everything a surface reacts to. One channel, one consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Recognizer(RecognizerSignal),
    /// The settle timer armed with this generation elapsed.
    SettleElapsed(u64),
    /// Speech synthesis started or finished.
    SpeakingChanged(bool),
    /// Text submitted through the typed input affordance.
    Typed(String),
    MicPressed,
    MicReleased,
    /// The conversation surface became visible or hidden.
    VisibilityChanged(bool),
}
