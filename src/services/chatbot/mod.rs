pub mod client;

pub use client::ChatbotClient;
