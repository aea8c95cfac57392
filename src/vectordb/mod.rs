//! Qdrant vector database integration (read side of the context fallback).

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;

#[cfg(test)]
mod tests;

pub use client::{ContextSearch, QdrantSearch};
pub use error::VectorDbError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockContextSearch, cosine_similarity};
pub use model::{CONTENT_PAYLOAD_FIELD, FallbackHit};
