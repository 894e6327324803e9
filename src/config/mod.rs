pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::TomlConfig;
    use crate::core::interpreter::Theme;
    use crate::utils::error::Result;
    use clap::{Parser, ValueEnum};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum ThemeArg {
        Light,
        Dark,
    }

    impl From<ThemeArg> for Theme {
        fn from(arg: ThemeArg) -> Self {
            match arg {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "portfolio-terminal")]
    #[command(about = "Interactive terminal portfolio with an AI chat assistant")]
    pub struct CliConfig {
        #[arg(long, short = 'c', help = "TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, help = "Gemini API key (defaults to GEMINI_API_KEY)")]
        pub api_key: Option<String>,

        #[arg(long, help = "Gemini model name")]
        pub model: Option<String>,

        #[arg(long, help = "Answer chat questions from the local table only")]
        pub offline: bool,

        #[arg(long, value_enum)]
        #[serde(skip)]
        pub theme: Option<ThemeArg>,

        #[arg(long, help = "Disable thinking and typing delays")]
        pub no_delay: bool,

        #[arg(long, help = "Portfolio data file (TOML)")]
        pub data: Option<String>,

        #[arg(long, short = 'v', help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 載入設定檔並套用命令列覆寫
        pub fn resolve(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    tracing::info!("📄 Loading configuration from {}", path);
                    TomlConfig::from_file(path)?
                }
                None => TomlConfig::default(),
            };

            if let Some(api_key) = &self.api_key {
                config.assistant.api_key = Some(api_key.clone());
            }
            if let Some(model) = &self.model {
                config.assistant.model = model.clone();
            }
            if self.offline {
                config.assistant.enabled = false;
            }
            if let Some(theme) = self.theme {
                config.terminal.theme = theme.into();
            }
            if self.no_delay {
                config.terminal.pacing = false;
            }
            if let Some(data) = &self.data {
                config.portfolio.data = Some(data.clone());
            }

            Ok(config)
        }
    }

}
