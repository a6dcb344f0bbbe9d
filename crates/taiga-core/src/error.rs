use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaigaError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaigaError {
    /// Short message suitable for the notifier line.
    pub fn user_message(&self) -> String {
        match self {
            TaigaError::Validation(msg) | TaigaError::NotFound(msg) => msg.clone(),
            TaigaError::Unauthorized(_) => "Session expired or access denied".to_string(),
            TaigaError::Connection(_) => "Could not reach the server".to_string(),
            other => other.to_string(),
        }
    }
}
