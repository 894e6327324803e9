use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use portfolio_terminal::core::fallback::FallbackMatcher;
use portfolio_terminal::core::pacing::MIN_THINKING;
use portfolio_terminal::domain::ports::TextGenerator;
use portfolio_terminal::{
    data, Assistant, ChatSession, CommandInterpreter, GeminiClient, GeminiConfig, SessionReply,
    TerminalSession,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn assistant_for(server: &MockServer) -> Result<Assistant> {
    let mut config = GeminiConfig::new("test-key");
    config.endpoint = server.base_url();
    config.timeout_seconds = 2;
    let client = GeminiClient::new(config)?;
    Ok(Assistant::new(Arc::new(data::portfolio())).with_generator(Arc::new(client)))
}

fn answer_body(text: &str) -> serde_json::Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
}

#[tokio::test]
async fn test_remote_answer_is_sanitized() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(GENERATE_PATH)
            .query_param("key", "test-key")
            .body_contains("User Question: what does he build?");
        then.status(200).json_body(answer_body(
            "## Summary\n**Abdul** builds \"scalable\" backends with `NestJS`. He's great.",
        ));
    });

    let assistant = assistant_for(&server)?;
    let mut session = ChatSession::new();
    let reply = assistant.respond(&mut session, "what does he build?").await;

    mock.assert();
    assert_eq!(reply, "Summary Abdul builds scalable backends with NestJS. He's great.");
    Ok(())
}

#[tokio::test]
async fn test_server_error_falls_back_to_local_table() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(500).body("internal error");
    });

    let assistant = assistant_for(&server)?;
    let mut session = ChatSession::new();
    let reply = assistant
        .respond(&mut session, "what are his backend skills?")
        .await;

    mock.assert();
    assert_eq!(
        reply,
        FallbackMatcher::default().respond("what are his backend skills?")
    );
    Ok(())
}

#[tokio::test]
async fn test_short_answer_falls_back() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).json_body(answer_body("**Yes.**"));
    });

    let assistant = assistant_for(&server)?;
    let mut session = ChatSession::new();
    let reply = assistant.respond(&mut session, "how can I contact him").await;

    assert_eq!(reply, FallbackMatcher::default().respond("how can I contact him"));
    Ok(())
}

#[tokio::test]
async fn test_exit_does_not_reach_the_network() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).json_body(answer_body("This should never be returned to the user."));
    });

    let assistant = assistant_for(&server)?;
    let mut session = ChatSession::new();
    let reply = assistant.respond(&mut session, "exit").await;

    mock.assert_hits(0);
    assert!(reply.starts_with("Thanks for chatting with me!"));
    Ok(())
}

struct SlowGenerator {
    delay: Duration,
}

#[async_trait]
impl TextGenerator for SlowGenerator {
    fn name(&self) -> &str {
        "slow"
    }

    async fn generate(&self, _prompt: &str) -> portfolio_terminal::Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok("A deliberately slow but complete answer about the portfolio.".to_string())
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_remote_answer_is_not_cut_short() -> Result<()> {
    let portfolio = Arc::new(data::portfolio());
    let assistant = Assistant::new(portfolio.clone()).with_generator(Arc::new(SlowGenerator {
        delay: Duration::from_millis(3000),
    }));
    let mut session = TerminalSession::new(CommandInterpreter::new(portfolio), assistant);

    session.submit("chat").await;
    let start = tokio::time::Instant::now();
    let reply = session.submit("tell me something").await;
    let elapsed = start.elapsed();

    assert_eq!(
        reply,
        SessionReply::ChatReply(
            "A deliberately slow but complete answer about the portfolio.".to_string()
        )
    );
    assert!(elapsed >= Duration::from_millis(3000));
    assert!(elapsed > MIN_THINKING);
    Ok(())
}
