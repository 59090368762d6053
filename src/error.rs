use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logsift
#[derive(Error, Debug)]
pub enum LogsiftError {
    /// Pattern compilation and other configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation errors
    #[error("Configuration validation failed: {errors:?}")]
    ConfigValidation { errors: Vec<ValidationError> },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration value
    #[error("Invalid configuration value at {path}: {message}")]
    InvalidConfigValue { path: String, message: String },

    /// Requested input file does not exist
    #[error("File '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    /// Any other failure while reading input
    #[error("Error reading input: {context}: {source}")]
    InputRead {
        source: std::io::Error,
        context: String,
    },

    /// Failure while writing output
    #[error("Error writing output: {context}: {source}")]
    OutputWrite {
        source: std::io::Error,
        context: String,
    },

    /// IO errors outside the input/output boundary (config files)
    #[error("IO error: {context}: {source}")]
    Io {
        source: std::io::Error,
        context: String,
    },

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error("JSON error: {context}: {source}")]
    Json {
        source: serde_json::Error,
        context: String,
    },
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Path to the configuration key that failed validation
    pub path: String,
    /// Error message describing the validation failure
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for logsift operations
pub type Result<T> = std::result::Result<T, LogsiftError>;
