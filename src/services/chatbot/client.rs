use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Bounded request timeout so a hung backend cannot pin the conversation
/// in `thinking` indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote assistant. Two operations, fire-and-forget: no
/// retry, no backoff, any non-2xx or parse failure is a soft error.
#[derive(Clone)]
pub struct ChatbotClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitiateRequest<'a> {
    session_id: &'a str,
}

#[derive(Deserialize)]
struct InitiateResponse {
    greeting: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageRequest<'a> {
    session_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct MessageResponse {
    response: String,
}

impl ChatbotClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// `POST {base}/chatbot/initiate` — returns the backend's greeting.
    pub async fn initiate(&self, session_id: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chatbot/initiate", self.base_url))
            .json(&InitiateRequest { session_id })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("chatbot initiate failed: {}", response.status()));
        }

        let body: InitiateResponse = response.json().await?;
        Ok(body.greeting)
    }

    /// `POST {base}/chatbot/message` — returns the assistant's reply.
    pub async fn send_message(&self, session_id: &str, message: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chatbot/message", self.base_url))
            .json(&MessageRequest {
                session_id,
                message,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("chatbot message failed: {}", response.status()));
        }

        let body: MessageResponse = response.json().await?;
        Ok(body.response)
    }
}
