use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Remote endpoint returned HTTP {status}: {body}")]
    RemoteStatusError { status: u16, body: String },

    #[error("Remote endpoint returned no usable text")]
    EmptyResponseError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Resource '{resource}' unavailable: {reason}")]
    ResourceError { resource: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::RemoteStatusError { .. } | Self::EmptyResponseError => {
                ErrorCategory::Network
            }
            Self::IoError(_) => ErrorCategory::Io,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ResourceError { .. } => ErrorCategory::Resource,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端失敗一律由本地回覆取代
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Resource => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => "Check your network connection or run with --offline".to_string(),
            Self::RemoteStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that GEMINI_API_KEY holds a valid key".to_string()
            }
            Self::RemoteStatusError { status, .. } if *status == 429 => {
                "Rate limited, wait a moment before asking again".to_string()
            }
            Self::RemoteStatusError { .. } | Self::EmptyResponseError => {
                "The assistant will answer from its built-in replies".to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::TomlError(_) => "Make sure the file is valid TOML".to_string(),
            Self::ConfigError { .. } => "Review the configuration file".to_string(),
            Self::InvalidConfigValueError { field, .. } => format!("Fix the value of '{}'", field),
            Self::MissingConfigError { field } => format!("Provide a value for '{}'", field),
            Self::ResourceError { resource, .. } => {
                format!("Make sure '{}' exists or point [resume].source at it", resource)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::RemoteStatusError { .. } | Self::EmptyResponseError => {
                "The AI assistant is unreachable right now".to_string()
            }
            Self::IoError(e) => format!("A file operation failed: {}", e),
            Self::TomlError(_) => "The configuration file could not be parsed".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
