use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::types::{ConversationMessage, QuickReply, SessionStatus};
use crate::services::chatbot::ChatbotClient;

/// Appended in place of a bot reply when the backend round trip fails.
pub const CONNECTION_LOST: &str = "Connection lost. Please check your network and try again.";

/// Wording that marks a turn as main-menu/welcome flavored for the
/// quick-reply heuristic.
const MENU_MARKERS: &[&str] = &["menu", "welcome", "main", "how can i help"];

/// One conversation with the remote assistant: session identity, the
/// append-only transcript, pending-request status and quick-reply
/// suggestions.
pub struct ConversationSession {
    client: ChatbotClient,
    session_id: Option<String>,
    messages: Vec<ConversationMessage>,
    status: SessionStatus,
    quick_replies: Vec<QuickReply>,
}

impl ConversationSession {
    pub fn new(client: ChatbotClient) -> Self {
        Self {
            client,
            session_id: None,
            messages: Vec::new(),
            status: SessionStatus::Idle,
            quick_replies: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_thinking(&self) -> bool {
        self.status == SessionStatus::Thinking
    }

    pub fn quick_replies(&self) -> &[QuickReply] {
        &self.quick_replies
    }

    /// Open the conversation: mint a session id and fetch the greeting.
    /// A failed initiate clears the id again so a later `open` retries
    /// with a fresh one. No-op when a session is already open.
    pub async fn open(&mut self) {
        if self.session_id.is_some() {
            return;
        }
        let id = generate_session_id();
        self.session_id = Some(id.clone());

        match self.client.initiate(&id).await {
            Ok(greeting) => {
                info!(session_id = %id, "conversation opened");
                self.messages.push(ConversationMessage::bot(greeting));
                self.quick_replies = main_menu_replies();
            }
            Err(e) => {
                warn!("chatbot initiate failed: {e:#}");
                self.session_id = None;
            }
        }
    }

    /// Send one user turn. Guarded: without an open session, or while a
    /// request is already outstanding, this is a no-op. Returns the bot
    /// reply when the round trip succeeds, for the caller to speak; a
    /// failed round trip appends the fixed apology instead.
    pub async fn send(&mut self, user_text: &str) -> Option<String> {
        let Some(session_id) = self.session_id.clone() else {
            debug!("send without an open session, ignoring");
            return None;
        };
        if self.status == SessionStatus::Thinking {
            debug!("send while a request is outstanding, ignoring");
            return None;
        }

        self.messages.push(ConversationMessage::user(user_text));
        self.status = SessionStatus::Thinking;
        self.quick_replies.clear();

        let outcome = self.client.send_message(&session_id, user_text).await;
        self.status = SessionStatus::Idle;

        match outcome {
            Ok(reply) => {
                self.messages.push(ConversationMessage::bot(reply.clone()));
                self.quick_replies = derive_quick_replies(user_text, &reply);
                Some(reply)
            }
            Err(e) => {
                warn!("chatbot message failed: {e:#}");
                self.messages.push(ConversationMessage::bot(CONNECTION_LOST));
                None
            }
        }
    }

    /// Local append for resolved voice commands. No network involved; the
    /// pair keeps spoken-only interactions visible in the transcript.
    pub fn append_exchange(&mut self, user_line: &str, bot_line: &str) {
        self.messages.push(ConversationMessage::user(user_line));
        self.messages.push(ConversationMessage::bot(bot_line));
    }

    /// Full reset: discard identity, transcript and suggestions.
    pub fn reset(&mut self) {
        self.session_id = None;
        self.messages.clear();
        self.quick_replies.clear();
        self.status = SessionStatus::Idle;
    }
}

/// Client-generated opaque correlation token: wall-clock millis plus a
/// random suffix. The backend either recognizes it or starts fresh.
fn generate_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}-{}", millis, Uuid::new_v4().simple())
}

/// The four top-level category suggestions.
pub fn main_menu_replies() -> Vec<QuickReply> {
    vec![
        QuickReply::new("Our services", "services"),
        QuickReply::new("Our products", "products"),
        QuickReply::new("Why choose us", "why us"),
        QuickReply::new("Contact us", "contact"),
    ]
}

/// Compact follow-up suggestions for mid-conversation turns.
pub fn followup_replies() -> Vec<QuickReply> {
    vec![
        QuickReply::new("Back to menu", "menu"),
        QuickReply::new("Contact us", "contact"),
        QuickReply::new("Book a visit", "booking"),
    ]
}

/// Heuristic convenience, not understanding: a menu/welcome flavored turn
/// gets the top-level categories, everything else the compact set.
/// Deterministic given fixed inputs.
pub fn derive_quick_replies(user_text: &str, bot_text: &str) -> Vec<QuickReply> {
    let user = user_text.to_lowercase();
    let bot = bot_text.to_lowercase();
    let menu_context = MENU_MARKERS
        .iter()
        .any(|marker| user.contains(marker) || bot.contains(marker));
    if menu_context {
        main_menu_replies()
    } else {
        followup_replies()
    }
}
