use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReframeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("No saved reframe with id {id}")]
    NotFound { id: u64 },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Input,
    Processing,
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReframeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Storage
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ValidationError { .. } | Self::NotFound { .. } => ErrorCategory::Input,
            Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ProcessingError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the data directory exists and is writable".to_string()
            }
            Self::SerializationError(_) | Self::CsvError(_) => {
                "The stored data may be corrupted; inspect or remove the files in the data directory"
                    .to_string()
            }
            Self::ConfigValidationError { .. } => {
                "Fix the configuration file and make sure it is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            Self::ValidationError { .. } => {
                "Fill in every required field before trying again".to_string()
            }
            Self::ProcessingError { .. } => "Retry the command with --verbose".to_string(),
            Self::NotFound { .. } => {
                "Run `reframe journal list` to see the saved ids".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write local data: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Stored data could not be read".to_string()
            }
            Self::ValidationError { message } => message.clone(),
            Self::NotFound { id } => format!("There is no saved reframe #{}", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReframeError>;
