pub mod session;
pub mod types;

pub use session::ConversationSession;
pub use types::{ConversationMessage, QuickReply, Sender, SessionStatus};
