use thiserror::Error;

#[derive(Debug, Error)]
pub enum WealthWiseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for WealthWiseError {
    fn from(e: serde_json::Error) -> Self {
        WealthWiseError::SerializationError(e.to_string())
    }
}
