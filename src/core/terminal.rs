use crate::core::assistant::{Assistant, ChatSession};
use crate::core::interpreter::{CommandInterpreter, CommandOutput};
use crate::core::pacing::{self, EXIT_THINKING, MAX_TYPING_DELAY, MIN_THINKING};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Words that leave chat mode when typed on their own.
const LEAVE_CHAT: &[&str] = &["exit", "quit"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Shell,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Command,
    Output,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(kind: EntryKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Artificial delays applied before output is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub thinking: Duration,
    pub exit_thinking: Duration,
    pub max_typing: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            thinking: MIN_THINKING,
            exit_thinking: EXIT_THINKING,
            max_typing: MAX_TYPING_DELAY,
        }
    }
}

impl Pacing {
    pub fn disabled() -> Self {
        Self {
            thinking: Duration::ZERO,
            exit_thinking: Duration::ZERO,
            max_typing: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    Output(String),
    Cleared,
    ChatStarted(String),
    ChatReply(String),
    ChatEnded(String),
    Nothing,
}

impl SessionReply {
    pub fn text(&self) -> Option<&str> {
        match self {
            SessionReply::Output(text)
            | SessionReply::ChatStarted(text)
            | SessionReply::ChatReply(text)
            | SessionReply::ChatEnded(text) => Some(text),
            SessionReply::Cleared | SessionReply::Nothing => None,
        }
    }
}

/// One interactive terminal: shell commands, chat mode, and the visible history.
pub struct TerminalSession {
    interpreter: CommandInterpreter,
    assistant: Assistant,
    chat: ChatSession,
    mode: Mode,
    history: Vec<HistoryEntry>,
    recall: Vec<String>,
    cursor: Option<usize>,
    pacing: Pacing,
}

impl TerminalSession {
    pub fn new(interpreter: CommandInterpreter, assistant: Assistant) -> Self {
        Self {
            interpreter,
            assistant,
            chat: ChatSession::new(),
            mode: Mode::Shell,
            history: Vec::new(),
            recall: Vec::new(),
            cursor: None,
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `jane@doe:~$` in the shell, `chat@jane:~$` while chatting.
    pub fn prompt(&self) -> String {
        let owner = &self.interpreter.portfolio().owner;
        match self.mode {
            Mode::Shell => owner.shell_prompt(),
            Mode::Chat => owner.chat_prompt(),
        }
    }

    /// Banner shown before the first prompt.
    pub fn welcome(&self) -> String {
        let owner = &self.interpreter.portfolio().owner;
        format!(
            "\nWelcome to {}'s Interactive Terminal Portfolio\n{}\n\n\
             Type 'help' to see available commands\n\
             Type 'chat' to start AI conversation\n\
             Type 'about' to learn more about me\n",
            owner.name, owner.title
        )
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn complete(&self, prefix: &str) -> Option<&'static str> {
        match self.mode {
            Mode::Shell => self.interpreter.complete(prefix),
            Mode::Chat => None,
        }
    }

    /// Steps back through submitted lines, stopping at the oldest.
    pub fn previous_command(&mut self) -> Option<&str> {
        if self.recall.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.recall.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.recall.get(index).map(String::as_str)
    }

    /// Steps forward; past the newest line the input is blank again.
    pub fn next_command(&mut self) -> Option<&str> {
        match self.cursor {
            Some(index) if index + 1 < self.recall.len() => {
                self.cursor = Some(index + 1);
                self.recall.get(index + 1).map(String::as_str)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    pub async fn submit(&mut self, line: &str) -> SessionReply {
        let input = line.trim();
        if input.is_empty() {
            return SessionReply::Nothing;
        }

        self.cursor = None;
        self.recall.push(input.to_string());

        match self.mode {
            Mode::Shell => self.run_command(input).await,
            Mode::Chat => self.run_chat(input).await,
        }
    }

    async fn run_command(&mut self, input: &str) -> SessionReply {
        self.history.push(HistoryEntry::new(EntryKind::Command, input));

        match self.interpreter.execute(input) {
            CommandOutput::Clear => {
                self.history.clear();
                SessionReply::Cleared
            }
            CommandOutput::EnterChat => {
                tracing::info!("Entering chat mode (online: {})", self.assistant.is_online());
                self.mode = Mode::Chat;
                let greeting = self.assistant.greeting(&mut self.chat);
                self.history
                    .push(HistoryEntry::new(EntryKind::Assistant, greeting.as_str()));
                SessionReply::ChatStarted(greeting)
            }
            CommandOutput::Text(text) => {
                let delay = pacing::typing_delay(text.chars().count(), self.pacing.max_typing);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                self.history
                    .push(HistoryEntry::new(EntryKind::Output, text.as_str()));
                SessionReply::Output(text)
            }
            CommandOutput::Empty => SessionReply::Nothing,
        }
    }

    async fn run_chat(&mut self, input: &str) -> SessionReply {
        self.history.push(HistoryEntry::new(EntryKind::User, input));

        let leaving = LEAVE_CHAT.contains(&input.to_lowercase().as_str());
        let delay = if leaving {
            self.pacing.exit_thinking
        } else {
            self.pacing.thinking
        };

        let assistant = &self.assistant;
        let chat = &mut self.chat;
        let reply = pacing::reveal_after(delay, assistant.respond(chat, input)).await;
        self.history
            .push(HistoryEntry::new(EntryKind::Assistant, reply.as_str()));

        if leaving {
            tracing::info!("Leaving chat mode");
            self.mode = Mode::Shell;
            SessionReply::ChatEnded(reply)
        } else {
            SessionReply::ChatReply(reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::FallbackMatcher;
    use crate::data;
    use std::sync::Arc;
    use tokio::time::Instant;

    fn session() -> TerminalSession {
        let portfolio = Arc::new(data::portfolio());
        TerminalSession::new(
            CommandInterpreter::new(portfolio.clone()),
            Assistant::new(portfolio),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_shell_output_is_recorded() {
        let mut session = session();
        let reply = session.submit("contact").await;

        assert!(reply.text().unwrap().contains("CONTACT INFORMATION"));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].kind, EntryKind::Command);
        assert_eq!(session.history()[1].kind, EntryKind::Output);
        assert_eq!(session.prompt(), "abdul@aziz:~$");
    }

    #[test]
    fn test_welcome_names_owner() {
        let banner = session().welcome();
        assert!(banner.contains("Welcome to Abdul Aziz's Interactive Terminal Portfolio"));
        assert!(banner.contains("\nType 'help' to see available commands\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_delay_is_capped() {
        let mut session = session();
        let start = Instant::now();
        session.submit("help").await;
        let elapsed = start.elapsed();
        assert!(elapsed >= MAX_TYPING_DELAY);
        assert!(elapsed < MAX_TYPING_DELAY + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_delay_counts_characters() {
        let portfolio = Arc::new(data::portfolio());
        let interpreter = CommandInterpreter::new(portfolio.clone());
        // 方塊字元每個佔 3 個位元組
        let text = match interpreter.execute("skills --id 1") {
            CommandOutput::Text(text) => text,
            other => panic!("expected text, got {:?}", other),
        };
        let chars = text.chars().count();
        assert!(text.len() > chars);
        let expected = pacing::typing_delay(chars, MAX_TYPING_DELAY);
        assert!(expected < MAX_TYPING_DELAY);

        let mut session = TerminalSession::new(interpreter, Assistant::new(portfolio));
        let start = Instant::now();
        session.submit("skills --id 1").await;
        let elapsed = start.elapsed();
        assert!(elapsed >= expected);
        assert!(elapsed < expected + Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_clear_discards_history() {
        let mut session = session().with_pacing(Pacing::disabled());
        session.submit("about").await;
        assert_eq!(session.submit("clear").await, SessionReply::Cleared);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = session().with_pacing(Pacing::disabled());
        assert_eq!(session.submit("   ").await, SessionReply::Nothing);
        assert!(session.history().is_empty());
        assert_eq!(session.previous_command(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_round_trip() {
        let mut session = session();

        let greeting = session.submit("chat").await;
        assert!(matches!(greeting, SessionReply::ChatStarted(_)));
        assert_eq!(session.mode(), Mode::Chat);
        assert_eq!(session.prompt(), "chat@abdul:~$");

        // 聊天模式下指令交給助理處理
        let start = Instant::now();
        let reply = session.submit("skills").await;
        assert!(start.elapsed() >= MIN_THINKING);
        assert_eq!(
            reply,
            SessionReply::ChatReply(FallbackMatcher::default().respond("skills").to_string())
        );
        assert_eq!(session.mode(), Mode::Chat);

        let start = Instant::now();
        let reply = session.submit("EXIT").await;
        assert!(start.elapsed() >= EXIT_THINKING);
        assert!(start.elapsed() < MIN_THINKING);
        assert!(matches!(reply, SessionReply::ChatEnded(_)));
        assert_eq!(session.mode(), Mode::Shell);
        assert!(session.chat().context().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_goodbye_mid_sentence_stays_in_chat() {
        let mut session = session();
        session.submit("chat").await;
        let reply = session.submit("ok bye for now").await;
        assert!(matches!(reply, SessionReply::ChatReply(_)));
        assert_eq!(session.mode(), Mode::Chat);
    }

    #[tokio::test]
    async fn test_command_recall() {
        let mut session = session().with_pacing(Pacing::disabled());
        session.submit("about").await;
        session.submit("skills --ai").await;
        session.submit("contact").await;

        assert_eq!(session.previous_command(), Some("contact"));
        assert_eq!(session.previous_command(), Some("skills --ai"));
        assert_eq!(session.previous_command(), Some("about"));
        assert_eq!(session.previous_command(), Some("about"));
        assert_eq!(session.next_command(), Some("skills --ai"));
        assert_eq!(session.next_command(), Some("contact"));
        assert_eq!(session.next_command(), None);
        assert_eq!(session.previous_command(), Some("contact"));
    }

    #[tokio::test]
    async fn test_completion_only_in_shell() {
        let mut session = session().with_pacing(Pacing::disabled());
        assert_eq!(session.complete("exp"), Some("experience"));
        session.submit("chat").await;
        assert_eq!(session.complete("exp"), None);
    }
}
