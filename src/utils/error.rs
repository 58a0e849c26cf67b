use thiserror::Error;

/// Public message for any scorer failure. Internal details stay in the logs.
pub const SCORING_FAILED_MESSAGE: &str = "Failed to analyze sentiment";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Sentiment scoring failed: {message}")]
    ScoringError { message: String },

    #[error("Invalid request body: {message}")]
    RequestBodyError { message: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn scoring(message: impl Into<String>) -> Self {
        Self::ScoringError {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with when it reaches a client.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::RequestBodyError { status, .. } => *status,
            _ => 500,
        }
    }

    /// Message safe to hand back to an HTTP caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::RequestBodyError { message, .. } => message.clone(),
            Self::ScoringError { .. } => SCORING_FAILED_MESSAGE.to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
