use clap::Parser;
use portfolio_terminal::config::toml_config::TomlConfig;
use portfolio_terminal::utils::{logger, validation::Validate};
use portfolio_terminal::{build_assistant, ChatSession};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "portfolio-ask")]
#[command(about = "Ask the portfolio assistant a single question")]
struct Args {
    /// Question to ask
    #[arg(required = true)]
    question: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Answer from the local table only
    #[arg(long)]
    offline: bool,

    /// Print the JSON message log instead of the answer
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌，--json 時日誌也輸出為 JSON
    if args.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    // 載入 TOML 配置
    let mut config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if args.offline {
        config.assistant.enabled = false;
        tracing::info!("🔧 Offline mode enabled");
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let portfolio = match config.load_portfolio() {
        Ok(portfolio) => Arc::new(portfolio),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    let assistant = build_assistant(&config, portfolio);
    let mut session = ChatSession::new();
    let question = args.question.join(" ");
    let answer = assistant.respond(&mut session, &question).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.messages())?);
    } else {
        println!("{}", answer);
    }

    Ok(())
}
