pub mod adapters;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{GeminiClient, GeminiConfig, LocalResumeHost};
pub use core::assistant::{Assistant, ChatSession};
pub use core::interpreter::{CommandInterpreter, CommandOutput, Theme};
pub use core::terminal::{Mode, Pacing, SessionReply, TerminalSession};
pub use domain::model::Portfolio;
pub use utils::error::{PortfolioError, Result};

use std::sync::Arc;

/// 依設定建立聊天助理；沒有金鑰或建立失敗時改為離線模式
pub fn build_assistant(config: &TomlConfig, portfolio: Arc<Portfolio>) -> Assistant {
    let assistant =
        Assistant::new(portfolio).with_min_response_chars(config.assistant.min_response_chars);

    let Some(gemini) = config.gemini_config() else {
        tracing::info!("🤖 Assistant disabled or no API key configured, chat runs offline");
        return assistant;
    };

    match GeminiClient::new(gemini) {
        Ok(client) => {
            tracing::info!("🤖 Chat assistant using {}", client.config().model);
            assistant.with_generator(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!("⚠️ Gemini client unavailable, chat runs offline: {}", e);
            assistant
        }
    }
}

/// 依設定組裝終端機
pub fn build_session(config: &TomlConfig) -> Result<TerminalSession> {
    let portfolio = Arc::new(config.load_portfolio()?);

    let mut interpreter =
        CommandInterpreter::new(portfolio.clone()).with_theme(config.terminal.theme);
    if let Some(host) = config.resume_host() {
        interpreter = interpreter.with_resume_host(Arc::new(host));
    }

    let assistant = build_assistant(config, portfolio);
    Ok(TerminalSession::new(interpreter, assistant).with_pacing(config.pacing()))
}
