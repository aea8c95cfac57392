use std::time::Duration;

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL};
use crate::embedding::error::EmbeddingError;

/// Default per-request timeout for the embedding service.
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
/// Configuration for [`TextEmbedder`](super::TextEmbedder).
pub struct EmbedderConfig {
    /// Embedding service URL. `None` selects stub mode.
    pub endpoint: Option<String>,
    /// Model identifier sent with every request.
    pub model: String,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// HTTP timeout for a single embedding request.
    pub request_timeout: Duration,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            request_timeout: DEFAULT_EMBEDDING_TIMEOUT,
        }
    }
}

impl EmbedderConfig {
    /// Creates a config targeting an embedding service.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no service; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self::default()
    }

    pub fn embedding_dim(mut self, dim: usize) -> Self {
        self.embedding_dim = dim;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns `true` if no embedding service is configured.
    pub fn is_stub(&self) -> bool {
        self.endpoint.is_none()
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be > 0".to_string(),
            });
        }

        if let Some(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "endpoint must not be blank".to_string(),
                });
            }
            if self.model.trim().is_empty() {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "model is required when an endpoint is set".to_string(),
                });
            }
        }

        Ok(())
    }
}
