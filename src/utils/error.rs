use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("'{input}' is not a valid integer: {source}")]
    ValueParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to save {path}: {message}")]
    Save { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EditorError {
    /// 載入或驗證階段的錯誤：不寫入任何檔案，直接結束
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EditorError::NotFound { .. }
                | EditorError::Parse { .. }
                | EditorError::Schema { .. }
                | EditorError::ConfigError { .. }
                | EditorError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EditorError::NotFound { path } => format!("Error: cannot find {}", path),
            EditorError::Parse { path, .. } => format!("Error: {} is not valid JSON", path),
            EditorError::Schema { message } => format!("Error: {}", message),
            EditorError::Save { message, .. } => format!("Failed to save file: {}", message),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EditorError::NotFound { .. } => "Check the --path argument or the working directory",
            EditorError::Parse { .. } => "Fix the JSON syntax of the input file",
            EditorError::Schema { .. } => "The input must be an object with a 'list' array",
            EditorError::ValueParse { .. } => "Enter a whole number such as 42 or -7",
            EditorError::Save { .. } => "Check write permissions and free disk space",
            EditorError::ConfigError { .. } | EditorError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            EditorError::IoError(_) | EditorError::SerializationError(_) => {
                "Run again with --verbose for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
