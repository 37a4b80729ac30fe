use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fixed delay between the recognizer's end signal and dispatch. Recognizers
/// fire "end" more than once per logical utterance; this window coalesces
/// them into exactly one dispatch.
pub const SETTLE_WINDOW: Duration = Duration::from_millis(100);

/// A cancellable deferred action. Re-arming cancels the previous arm and
/// bumps the generation, so a fire from a superseded arm is detectable by
/// whoever receives the event.
pub struct SettleTimer {
    delay: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            handle: None,
        }
    }

    /// Arm (or re-arm) the timer. After the delay, `make_event(generation)`
    /// is sent into the surface channel. Returns the new generation.
    pub fn schedule<E, F>(&mut self, tx: mpsc::Sender<E>, make_event: F) -> u64
    where
        E: Send + 'static,
        F: FnOnce(u64) -> E + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(make_event(generation)).await;
        }));
        generation
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True when `generation` belongs to the most recent arm.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
