use thiserror::Error;

/// Core error type for TSBIND operations.
#[derive(Error, Debug)]
pub enum TsbindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TsbindError {
    fn from(e: serde_json::Error) -> Self {
        TsbindError::Serialization(e.to_string())
    }
}

/// Result type alias using TsbindError.
pub type Result<T> = std::result::Result<T, TsbindError>;
