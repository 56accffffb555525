use std::fmt;

/// Error type for board decoding and personality storage
#[derive(Debug, Clone)]
pub enum EngineError {
    /// A board snapshot contained a square code outside the two-character convention
    InvalidBoard(String),
    /// Reading or writing a stats/weights document failed
    Io(String),
    /// A persisted document exists but does not match the expected schema
    Configuration(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidBoard(msg) => write!(f, "Invalid board: {}", msg),
            EngineError::Io(msg) => write!(f, "I/O error: {}", msg),
            EngineError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::Configuration(format!("JSON document error: {}", error))
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, EngineError>;
