pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod intent;
pub mod services;
pub mod speech;
pub mod surface;

// Re-export specific items if needed for convenient access
pub use chat::session::ConversationSession;
pub use surface::orchestrator::Orchestrator;
