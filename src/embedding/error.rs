use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request to '{endpoint}' failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    #[error("embedding service returned an invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },
}
