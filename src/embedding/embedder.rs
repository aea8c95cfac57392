use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::EmbedderConfig;
use super::error::EmbeddingError;

/// Text → vector interface consumed by the fallback client.
pub trait Embedder: Send + Sync {
    /// Generates an embedding for `text`.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;

    /// Output embedding dimension.
    fn embedding_dim(&self) -> usize;
}

enum EmbedderBackend {
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
    Stub,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

/// Embedding generator backed by an HTTP service (supports stub mode).
pub struct TextEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for TextEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Http { endpoint, .. } => format!("Http({})", endpoint),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("model", &self.config.model)
            .field("embedding_dim", &self.config.embedding_dim)
            .finish()
    }
}

impl TextEmbedder {
    /// Builds the embedder from a config (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let Some(endpoint) = config.endpoint.clone() else {
            warn!("Embedder running in STUB mode (placeholder vectors only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        };

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        info!(
            endpoint = %endpoint,
            model = %config.model,
            embedding_dim = config.embedding_dim,
            "Embedding service configured"
        );

        Ok(Self {
            backend: EmbedderBackend::Http { client, endpoint },
            config,
        })
    }

    async fn embed_with_service(
        &self,
        text: &str,
        client: &reqwest::Client,
        endpoint: &str,
    ) -> Result<Vec<f32>, EmbeddingError> {
        debug!(text_len = text.len(), "Requesting embedding");

        let request_failed = |reason: String| EmbeddingError::RequestFailed {
            endpoint: endpoint.to_string(),
            reason,
        };

        let response = client
            .post(endpoint)
            .json(&EmbeddingRequest {
                model: &self.config.model,
                prompt: text,
            })
            .send()
            .await
            .map_err(|e| request_failed(e.to_string()))?
            .error_for_status()
            .map_err(|e| request_failed(e.to_string()))?;

        let body: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        if body.embedding.len() != self.config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.embedding_dim,
                actual: body.embedding.len(),
            });
        }

        Ok(body.embedding)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

impl Embedder for TextEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Http { client, endpoint } => {
                self.embed_with_service(text, client, endpoint).await
            }
            EmbedderBackend::Stub => Ok(placeholder_embedding(text, self.config.embedding_dim)),
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }
}

/// Deterministic, L2-normalised placeholder vector for `text`.
///
/// Seeded from the blake3 hash of `text`, so equal inputs always produce equal vectors.
pub fn placeholder_embedding(text: &str, dim: usize) -> Vec<f32> {
    let hash = blake3::hash(text.as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash.as_bytes()[..8]);
    let mut state = u64::from_le_bytes(seed);

    let mut embedding = Vec::with_capacity(dim);
    for _ in 0..dim {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
        embedding.push(value);
    }

    normalize(&mut embedding);
    embedding
}

fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    }
}
