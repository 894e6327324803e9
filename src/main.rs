use clap::Parser;
use portfolio_terminal::utils::error::{ErrorSeverity, PortfolioError};
use portfolio_terminal::utils::{logger, validation::Validate};
use portfolio_terminal::{build_session, CliConfig, Mode, SessionReply};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn exit_with(e: &PortfolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(exit_code(e.severity()));
}

/// 根據錯誤嚴重程度決定退出碼，任何錯誤都不會回傳 0
fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting portfolio-terminal");

    let config = cli.resolve().unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let mut session = build_session(&config).unwrap_or_else(|e| exit_with(&e));
    println!("{}", session.welcome());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", session.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if session.mode() == Mode::Shell && line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        if session.mode() == Mode::Chat && !line.trim().is_empty() {
            println!("{} thinking...", session.prompt());
        }

        match session.submit(&line).await {
            SessionReply::Cleared => print!("{}", CLEAR_SCREEN),
            SessionReply::Nothing => {}
            reply => {
                if let Some(text) = reply.text() {
                    println!("{}", text);
                }
            }
        }
    }

    tracing::info!("👋 Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_exits_non_zero() {
        for severity in [
            ErrorSeverity::Low,
            ErrorSeverity::Medium,
            ErrorSeverity::High,
            ErrorSeverity::Critical,
        ] {
            assert_ne!(exit_code(severity), 0, "{:?}", severity);
        }
        assert_eq!(exit_code(ErrorSeverity::Critical), 3);
    }
}
