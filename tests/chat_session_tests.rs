use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use loomvoice::chat::session::{
    derive_quick_replies, followup_replies, main_menu_replies, ConversationSession,
    CONNECTION_LOST,
};
use loomvoice::chat::types::{Sender, SessionStatus};
use loomvoice::services::chatbot::ChatbotClient;

async fn mount_initiate(server: &MockServer, greeting: &str) {
    Mock::given(method("POST"))
        .and(path("/chatbot/initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "greeting": greeting })))
        .mount(server)
        .await;
}

async fn open_session(server: &MockServer) -> ConversationSession {
    let mut session = ConversationSession::new(ChatbotClient::new(server.uri()));
    session.open().await;
    session
}

#[tokio::test]
async fn test_open_seeds_greeting_and_menu_replies() {
    let server = MockServer::start().await;
    mount_initiate(&server, "Hi there!").await;

    let session = open_session(&server).await;

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].sender, Sender::Bot);
    assert_eq!(session.messages()[0].text, "Hi there!");
    assert_eq!(session.quick_replies(), main_menu_replies().as_slice());
    assert!(session.session_id().is_some());
    assert_eq!(session.status(), SessionStatus::Idle);
}

#[tokio::test]
async fn test_open_is_idempotent_once_established() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "greeting": "Hello!" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = open_session(&server).await;
    let id = session.session_id().map(str::to_string);
    session.open().await;

    assert_eq!(session.session_id().map(str::to_string), id);
    assert_eq!(session.messages().len(), 1, "no duplicate greeting");
}

#[tokio::test]
async fn test_send_without_open_is_a_no_op() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/message"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "unreachable" })),
        )
        .expect(0)
        .mount(&server)
        .await;

    let mut session = ConversationSession::new(ChatbotClient::new(server.uri()));
    let reply = session.send("hello").await;

    assert!(reply.is_none());
    assert!(session.messages().is_empty(), "no message may be appended");
    assert_eq!(session.status(), SessionStatus::Idle);
}

#[tokio::test]
async fn test_send_round_trip_appends_and_returns_reply() {
    let server = MockServer::start().await;
    mount_initiate(&server, "Hi there!").await;
    Mock::given(method("POST"))
        .and(path("/chatbot/message"))
        .and(body_partial_json(json!({ "message": "do you deliver?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "We deliver nationwide." })),
        )
        .mount(&server)
        .await;

    let mut session = open_session(&server).await;
    let reply = session.send("do you deliver?").await;

    assert_eq!(reply.as_deref(), Some("We deliver nationwide."));
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].text, "do you deliver?");
    assert_eq!(messages[2].sender, Sender::Bot);
    assert_eq!(messages[2].text, "We deliver nationwide.");
    assert_eq!(session.status(), SessionStatus::Idle);
    assert_eq!(session.quick_replies(), followup_replies().as_slice());
}

#[tokio::test]
async fn test_failed_send_appends_apology() {
    let server = MockServer::start().await;
    mount_initiate(&server, "Hi there!").await;
    Mock::given(method("POST"))
        .and(path("/chatbot/message"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = open_session(&server).await;
    let reply = session.send("pricing?").await;

    assert!(reply.is_none());
    let messages = session.messages();
    let tail = &messages[messages.len() - 2..];
    assert_eq!(tail[0].sender, Sender::User);
    assert_eq!(tail[0].text, "pricing?");
    assert_eq!(tail[1].sender, Sender::Bot);
    assert_eq!(tail[1].text, CONNECTION_LOST);
    assert_eq!(session.status(), SessionStatus::Idle);
}

#[tokio::test]
async fn test_malformed_response_is_a_soft_failure() {
    let server = MockServer::start().await;
    mount_initiate(&server, "Hi there!").await;
    Mock::given(method("POST"))
        .and(path("/chatbot/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let mut session = open_session(&server).await;
    let reply = session.send("pricing?").await;

    assert!(reply.is_none());
    assert_eq!(
        session.messages().last().map(|m| m.text.as_str()),
        Some(CONNECTION_LOST)
    );
    assert_eq!(session.status(), SessionStatus::Idle);
}

#[tokio::test]
async fn test_failed_open_leaves_session_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chatbot/initiate"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut session = ConversationSession::new(ChatbotClient::new(server.uri()));
    session.open().await;

    assert!(session.messages().is_empty());
    assert!(
        session.session_id().is_none(),
        "failed initiate must clear the id so reopening retries"
    );
}

#[tokio::test]
async fn test_reset_discards_identity_and_transcript() {
    let server = MockServer::start().await;
    mount_initiate(&server, "Hi there!").await;

    let mut session = open_session(&server).await;
    session.reset();

    assert!(session.session_id().is_none());
    assert!(session.messages().is_empty());
    assert!(session.quick_replies().is_empty());
}

#[test]
fn test_quick_reply_derivation_is_deterministic() {
    let menu = derive_quick_replies("back to menu", "Welcome back! What would you like to see?");
    assert_eq!(menu, main_menu_replies());

    let followup = derive_quick_replies("do you deliver?", "We deliver nationwide.");
    assert_eq!(followup, followup_replies());
}
