use crate::adapters::gemini::{self, GeminiConfig, GenerationSettings};
use crate::adapters::resume::{self, LocalResumeHost};
use crate::core::interpreter::Theme;
use crate::core::terminal::Pacing;
use crate::data;
use crate::domain::model::Portfolio;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub assistant: AssistantSection,
    pub terminal: TerminalSection,
    pub resume: Option<ResumeSection>,
    pub portfolio: PortfolioSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSection {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub min_response_chars: usize,
    pub generation: GenerationSettings,
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            endpoint: gemini::DEFAULT_ENDPOINT.to_string(),
            model: gemini::DEFAULT_MODEL.to_string(),
            timeout_seconds: gemini::DEFAULT_TIMEOUT_SECONDS,
            min_response_chars: crate::core::assistant::MIN_RESPONSE_CHARS,
            generation: GenerationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSection {
    pub theme: Theme,
    pub pacing: bool,
    pub thinking_ms: u64,
    pub exit_thinking_ms: u64,
    pub max_typing_ms: u64,
}

impl Default for TerminalSection {
    fn default() -> Self {
        let pacing = Pacing::default();
        Self {
            theme: Theme::default(),
            pacing: true,
            thinking_ms: pacing.thinking.as_millis() as u64,
            exit_thinking_ms: pacing.exit_thinking.as_millis() as u64,
            max_typing_ms: pacing.max_typing.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSection {
    pub source: String,
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
    #[serde(default = "default_download_name")]
    pub download_name: String,
}

fn default_download_dir() -> String {
    "./downloads".to_string()
}

fn default_download_name() -> String {
    resume::DEFAULT_DOWNLOAD_NAME.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSection {
    /// 自訂資料檔 (TOML)，未設定時使用內建資料
    pub data: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// API key from the file, else from `GEMINI_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_or(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_or(&self, env_value: Option<String>) -> Option<String> {
        let usable = |key: &String| !key.trim().is_empty() && !ENV_PLACEHOLDER.is_match(key);
        self.assistant
            .api_key
            .clone()
            .filter(usable)
            .or_else(|| env_value.filter(usable))
    }

    /// 取得 Gemini 設定；停用或沒有金鑰時回傳 None
    pub fn gemini_config(&self) -> Option<GeminiConfig> {
        if !self.assistant.enabled {
            return None;
        }
        let api_key = self.api_key()?;
        Some(GeminiConfig {
            endpoint: self.assistant.endpoint.clone(),
            model: self.assistant.model.clone(),
            api_key,
            timeout_seconds: self.assistant.timeout_seconds,
            generation: self.assistant.generation.clone(),
        })
    }

    pub fn pacing(&self) -> Pacing {
        if !self.terminal.pacing {
            return Pacing::disabled();
        }
        Pacing {
            thinking: Duration::from_millis(self.terminal.thinking_ms),
            exit_thinking: Duration::from_millis(self.terminal.exit_thinking_ms),
            max_typing: Duration::from_millis(self.terminal.max_typing_ms),
        }
    }

    pub fn resume_host(&self) -> Option<LocalResumeHost> {
        self.resume.as_ref().map(|section| {
            LocalResumeHost::new(&section.source, &section.download_dir)
                .with_download_name(section.download_name.clone())
        })
    }

    /// 載入作品集資料
    pub fn load_portfolio(&self) -> Result<Portfolio> {
        match &self.portfolio.data {
            Some(path) => {
                tracing::info!("📂 Loading portfolio data from {}", path);
                Portfolio::from_file(path)
            }
            None => Ok(data::portfolio()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("assistant.endpoint", &self.assistant.endpoint)?;
        validation::validate_non_empty_string("assistant.model", &self.assistant.model)?;
        validation::validate_positive_number(
            "assistant.timeout_seconds",
            self.assistant.timeout_seconds,
            1,
        )?;
        self.assistant.generation.validate()?;

        if let Some(resume) = &self.resume {
            validation::validate_path("resume.source", &resume.source)?;
            validation::validate_path("resume.download_dir", &resume.download_dir)?;
            validation::validate_file_extension(
                "resume.download_name",
                &resume.download_name,
                &["pdf"],
            )?;
        }

        if let Some(path) = &self.portfolio.data {
            validation::validate_file_extension("portfolio.data", path, &["toml"])?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
