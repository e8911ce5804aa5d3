use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Model output that could not be recovered into valid JSON.
    #[error("Failed to parse JSON from model output: {reason}\nJSON preview: {preview}...")]
    MalformedUpstreamResponse { preview: String, reason: String },

    #[error("Model output does not match the expected shape: {0}")]
    UpstreamSchemaViolation(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("{0} environment variable not set")]
    MissingConfiguration(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
