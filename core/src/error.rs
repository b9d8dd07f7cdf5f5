use thiserror::Error;

/// Main error type for Donut
#[derive(Debug, Error)]
pub enum DonutError {
    /// The server answered with a non-success status
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DonutError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DonutError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using DonutError
pub type Result<T> = std::result::Result<T, DonutError>;
