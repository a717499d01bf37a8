//! Error types and handling for Flow Judge core

use thiserror::Error;

/// Result type alias for Flow Judge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Flow Judge core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Adapter transport errors
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid generation parameters: {message}")]
    InvalidGenerationParams { message: String },
}

/// Adapter transport errors
///
/// Raised inside an adapter's fetch operations. The model layer never
/// catches or reinterprets these; they surface to the caller unchanged.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
