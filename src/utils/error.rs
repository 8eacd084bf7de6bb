use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingsError {
    #[error("Error in contestant result {line}: {message}")]
    Batch { line: usize, message: String },

    #[error("Cannot generate a valid contest result from invalid input.")]
    InvalidState,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Contest results store not found: {path}")]
    StoreNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Storage,
    Configuration,
}

impl RankingsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RankingsError::Batch { .. } | RankingsError::InvalidState => ErrorCategory::Validation,
            RankingsError::IoError(_)
            | RankingsError::SerializationError(_)
            | RankingsError::StoreNotFound { .. } => ErrorCategory::Storage,
            RankingsError::ConfigError { .. } | RankingsError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code for this failure; never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Storage => 2,
            ErrorCategory::Configuration => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingsError>;
