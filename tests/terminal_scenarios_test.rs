use anyhow::Result;
use portfolio_terminal::core::pacing::MIN_THINKING;
use portfolio_terminal::{
    Assistant, CommandInterpreter, CommandOutput, Mode, Pacing, Portfolio, SessionReply,
    TerminalSession,
};
use std::sync::Arc;

const CUSTOM_PORTFOLIO: &str = r#"
[owner]
name = "Jane Doe"
title = "Backend Engineer"
location = "Taipei"
education = "BSc Computer Science"
handle = "@janedoe"
linkedin = "linkedin.com/in/janedoe"
github = "github.com/janedoe"
leetcode = "leetcode.com/janedoe"
email = "jane@example.com"

[[skills]]
name = "Backend Frameworks"
skills = [
    { name = "NestJS", proficiency = 95 },
    { name = "Express.js", proficiency = 90 },
    { name = "Node.js", proficiency = 85 },
    { name = "FastAPI", proficiency = 80 },
    { name = "Django", proficiency = 75 },
]

[[experience]]
id = 7
title = "Platform Engineer"
location = "Acme, Taipei"
date = "Jan 2022 - Present"
type = "fulltime"
description = "Runs the platform team."
skills = ["Go", "Kubernetes"]

[[projects]]
id = 3
title = "Queue Service"
description = "Durable job queue."
tags = ["Rust", "Redis"]
type = "backend"
github_url = "https://github.com/janedoe/queue"
"#;

fn custom_interpreter() -> Result<CommandInterpreter> {
    let portfolio = Portfolio::from_toml_str(CUSTOM_PORTFOLIO)?;
    Ok(CommandInterpreter::new(Arc::new(portfolio)))
}

fn text(output: CommandOutput) -> String {
    match output {
        CommandOutput::Text(text) => text,
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_backend_skills_render_detail_bars() -> Result<()> {
    let output = text(custom_interpreter()?.execute("skills --backend"));

    assert!(output.contains("Backend Frameworks"));
    let bar_lines: Vec<&str> = output.lines().filter(|line| line.contains('%')).collect();
    assert_eq!(bar_lines.len(), 5);

    let expected = [("NestJS", 38), ("Express.js", 36), ("Node.js", 34), ("FastAPI", 32), ("Django", 30)];
    for (line, (name, filled)) in bar_lines.iter().zip(expected) {
        assert!(line.starts_with(name), "{}", line);
        assert_eq!(line.chars().filter(|c| *c == '█').count(), filled);
        assert_eq!(line.chars().filter(|c| *c == '░').count(), 40 - filled);
    }
    Ok(())
}

#[test]
fn test_custom_dataset_lookups() -> Result<()> {
    let interpreter = custom_interpreter()?;

    assert!(text(interpreter.execute("experience --id 7")).contains("Platform Engineer"));
    assert_eq!(
        text(interpreter.execute("experience --id 999")),
        "Experience with ID 999 not found."
    );
    assert_eq!(
        text(interpreter.execute("projects --id 999")),
        "Project with ID 999 not found."
    );
    assert_eq!(
        text(interpreter.execute("skills --ai")),
        "Skill category 'AI/ML Integration' not found."
    );
    assert_eq!(text(interpreter.execute("projects --ai")), "No AI projects found.");
    assert!(text(interpreter.execute("contact")).contains("jane@example.com"));
    Ok(())
}

#[test]
fn test_filter_output_is_stable() -> Result<()> {
    let interpreter = CommandInterpreter::new(Arc::new(portfolio_terminal::data::portfolio()));
    let first = interpreter.execute("projects --ai");
    let second = interpreter.execute("projects --ai");
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_unknown_commands() {
    let interpreter = CommandInterpreter::new(Arc::new(portfolio_terminal::data::portfolio()));

    let output = text(interpreter.execute("projetcs"));
    assert!(output.contains("Command not found: projetcs"));
    assert!(output.contains("Did you mean: projects?"));

    let output = text(interpreter.execute("qqqqqqqq"));
    assert!(!output.contains("Did you mean"));
}

#[tokio::test]
async fn test_full_session_walkthrough() -> Result<()> {
    let portfolio = Arc::new(Portfolio::from_toml_str(CUSTOM_PORTFOLIO)?);
    let mut session = TerminalSession::new(
        CommandInterpreter::new(portfolio.clone()),
        Assistant::new(portfolio),
    )
    .with_pacing(Pacing::disabled());

    let about = session.submit("about").await;
    assert!(about.text().unwrap_or_default().contains("Jane Doe"));

    let greeting = session.submit("chat").await;
    assert!(matches!(greeting, SessionReply::ChatStarted(_)));
    assert!(greeting.text().unwrap_or_default().contains("Jane Doe"));

    let reply = session.submit("how can I contact him?").await;
    assert!(matches!(reply, SessionReply::ChatReply(_)));

    let reply = session.submit("quit").await;
    assert!(matches!(reply, SessionReply::ChatEnded(_)));
    assert_eq!(session.mode(), Mode::Shell);

    assert_eq!(session.submit("clear").await, SessionReply::Cleared);
    assert!(session.history().is_empty());
    assert_eq!(session.previous_command(), Some("clear"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_waits_for_thinking_delay() -> Result<()> {
    let portfolio = Arc::new(portfolio_terminal::data::portfolio());
    let mut session = TerminalSession::new(
        CommandInterpreter::new(portfolio.clone()),
        Assistant::new(portfolio),
    );

    session.submit("chat").await;
    let start = tokio::time::Instant::now();
    session.submit("tell me about his projects").await;
    assert!(start.elapsed() >= MIN_THINKING);
    Ok(())
}

#[tokio::test]
async fn test_loaded_owner_never_answers_as_builtin_owner() -> Result<()> {
    let portfolio = Arc::new(Portfolio::from_toml_str(CUSTOM_PORTFOLIO)?);
    let mut session = TerminalSession::new(
        CommandInterpreter::new(portfolio.clone()),
        Assistant::new(portfolio),
    )
    .with_pacing(Pacing::disabled());

    assert_eq!(session.prompt(), "jane@doe:~$");
    let pwd = session.submit("pwd").await;
    assert_eq!(pwd.text(), Some("/home/jane/projects/portfolio-terminal"));
    let clients = session.submit("projects --client").await;
    assert_eq!(clients.text(), Some("No client projects found."));

    session.submit("chat").await;
    assert_eq!(session.prompt(), "chat@jane:~$");

    let contact = session.submit("how can I contact her?").await;
    let contact = contact.text().unwrap_or_default().to_string();
    assert!(contact.contains("@janedoe"), "{}", contact);

    for question in [
        "what are her hobbies?",
        "how many leetcode problems?",
        "does she know docker?",
        "what projects has she built?",
        "where has she worked?",
        "hello",
    ] {
        let reply = session.submit(question).await;
        let reply = reply.text().unwrap_or_default();
        assert!(!reply.contains("connect2abdulaziz"), "{}: {}", question, reply);
        assert!(!reply.contains("Abdul"), "{}: {}", question, reply);
        assert!(!reply.contains("DeveloperTag"), "{}: {}", question, reply);
    }
    Ok(())
}
