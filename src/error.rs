use thiserror::Error;

/// MBTA client error types
#[derive(Error, Debug)]
pub enum MbtaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API returned an empty response")]
    EmptyResponse,
}

/// Result type for MBTA operations
pub type MbtaResult<T> = Result<T, MbtaError>;

impl MbtaError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
