use thiserror::Error;

/// Diagnostic written to standard error for any rejected document.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON input";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Invalid JSON input")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid JSON input")]
    InputTooLarge { size: usize, limit: usize },
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config Error: {0}")]
    Config(String),
}

impl NormalizeError {
    /// Whether the error is a rejection of the document itself, as opposed
    /// to a failure of the surrounding process.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            NormalizeError::Parse(_) | NormalizeError::InputTooLarge { .. }
        )
    }
}
