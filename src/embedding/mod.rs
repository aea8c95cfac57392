//! Embedding generation for the context fallback.
//!
//! [`TextEmbedder`] calls an external embedding service, or runs in stub mode producing
//! [`placeholder_embedding`] vectors when no service is configured.

/// Embedder configuration.
pub mod config;
mod embedder;
mod error;


pub use config::{DEFAULT_EMBEDDING_TIMEOUT, EmbedderConfig};
pub use embedder::{Embedder, TextEmbedder, placeholder_embedding};
pub use error::EmbeddingError;
