use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use loomvoice::config::SurfaceConfig;
use loomvoice::error::OutputError;
use loomvoice::event::Event;
use loomvoice::services::chatbot::ChatbotClient;
use loomvoice::speech::provider::{SpeechOutputProvider, UnavailableCapture};
use loomvoice::surface::{NavigationSink, Orchestrator};

/// Speaks through the platform `say` command, killing the previous child
/// before spawning the next so the newest request always wins.
struct SayCommandOutput {
    events: mpsc::Sender<Event>,
    stop: Option<tokio::sync::oneshot::Sender<()>>,
}

impl SayCommandOutput {
    fn new(events: mpsc::Sender<Event>) -> Self {
        Self { events, stop: None }
    }
}

impl SpeechOutputProvider for SayCommandOutput {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, text: &str) -> Result<(), OutputError> {
        self.cancel();

        let mut child = tokio::process::Command::new("say")
            .arg(text)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| OutputError::Synthesis(e.to_string()))?;

        let (stop_tx, mut stop_rx) = tokio::sync::oneshot::channel();
        self.stop = Some(stop_tx);

        let events = self.events.clone();
        tokio::spawn(async move {
            let _ = events.send(Event::SpeakingChanged(true)).await;
            tokio::select! {
                _ = child.wait() => {}
                _ = &mut stop_rx => {
                    let _ = child.kill().await;
                }
            }
            let _ = events.send(Event::SpeakingChanged(false)).await;
        });

        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// Routing collaborator for the demo: prints where the app would navigate.
struct LoggingNavigation;

impl NavigationSink for LoggingNavigation {
    fn navigate(&mut self, path: &str) {
        println!("[NAVIGATE] {path}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("CHATBOT_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    info!("chat hub demo, backend at {base_url}");

    let (tx, mut rx) = mpsc::channel::<Event>(64);

    // Headless host: no speech capture, typed input only. Output goes
    // through `say` where present and degrades silently elsewhere.
    let mut surface = Orchestrator::new(
        SurfaceConfig::chat_hub(),
        Box::new(UnavailableCapture),
        Box::new(SayCommandOutput::new(tx.clone())),
        ChatbotClient::new(base_url),
        tx.clone(),
        Box::new(LoggingNavigation),
    );

    surface.open().await;
    if surface.session().messages().is_empty() {
        warn!("backend unreachable, conversation will retry on next open");
    }
    for message in surface.session().messages() {
        println!("[{:?}] {}", message.sender, message.text);
    }

    // stdin feeds typed submissions into the surface channel
    let shutdown = CancellationToken::new();
    let stdin_shutdown = shutdown.clone();
    let stdin_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                _ = stdin_shutdown.cancelled() => break,
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        let _ = stdin_tx.send(Event::Typed(line)).await;
                    }
                    _ => break,
                },
            }
        }
    });

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                shutdown.cancel();
                break;
            }
            event = rx.recv() => {
                let Some(event) = event else { break };
                let before = surface.session().messages().len();
                surface.handle_event(event).await;
                for message in &surface.session().messages()[before..] {
                    println!("[{:?}] {}", message.sender, message.text);
                }
            }
        }
    }

    Ok(())
}
