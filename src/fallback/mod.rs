//! Context fallback: embedding + nearest-neighbour search over the paired-sentence corpus.
//!
//! Consulted only when dictionary resolution comes back empty. Every failure mode folds
//! into a [`FallbackOutcome`]; nothing here returns an error to the resolver.

pub mod config;

#[cfg(test)]
mod tests;

pub use config::FallbackConfig;

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::embedding::{Embedder, placeholder_embedding};
use crate::vectordb::{ContextSearch, FallbackHit};

#[derive(Debug, Clone, PartialEq)]
/// Result of one fallback lookup.
pub enum FallbackOutcome {
    /// Best hit above the relevance threshold.
    Hit(FallbackHit),
    /// The search ran but returned nothing usable.
    Miss,
    /// Search failed or timed out.
    BackendUnavailable {
        /// Error message.
        reason: String,
    },
}

impl FallbackOutcome {
    /// Returns the hit, if any.
    pub fn hit(&self) -> Option<&FallbackHit> {
        match self {
            FallbackOutcome::Hit(hit) => Some(hit),
            FallbackOutcome::Miss | FallbackOutcome::BackendUnavailable { .. } => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, FallbackOutcome::Hit(_))
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FallbackOutcome::Hit(_) => "hit",
            FallbackOutcome::Miss => "miss",
            FallbackOutcome::BackendUnavailable { .. } => "backend_unavailable",
        }
    }
}

impl std::fmt::Display for FallbackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackOutcome::Hit(hit) => write!(f, "HIT (score: {:.4})", hit.score),
            FallbackOutcome::Miss => write!(f, "MISS"),
            FallbackOutcome::BackendUnavailable { reason } => {
                write!(f, "BACKEND_UNAVAILABLE ({})", reason)
            }
        }
    }
}

/// Narrow interface the resolver uses for context search.
pub trait ContextLookup: Send + Sync {
    fn lookup(&self, text: &str) -> impl Future<Output = FallbackOutcome> + Send;
}

impl<T: ContextLookup> ContextLookup for Arc<T> {
    fn lookup(&self, text: &str) -> impl Future<Output = FallbackOutcome> + Send {
        (**self).lookup(text)
    }
}

/// [`ContextLookup`] backed by an embedder and a vector search backend.
pub struct ContextFallback<E: Embedder, S: ContextSearch> {
    embedder: E,
    search: S,
    config: FallbackConfig,
}

impl<E: Embedder, S: ContextSearch> std::fmt::Debug for ContextFallback<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextFallback")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: Embedder, S: ContextSearch> ContextFallback<E, S> {
    pub fn new(embedder: E, search: S, config: FallbackConfig) -> Self {
        Self {
            embedder,
            search,
            config,
        }
    }

    pub fn config(&self) -> &FallbackConfig {
        &self.config
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn search_backend(&self) -> &S {
        &self.search
    }

    async fn embed_or_placeholder(&self, text: &str) -> Vec<f32> {
        match self.embedder.embed(text).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!(error = %e, "Embedding failed, using placeholder vector");
                placeholder_embedding(text, self.embedder.embedding_dim())
            }
        }
    }

    async fn search_top_hit(&self, text: &str) -> FallbackOutcome {
        let vector = self.embed_or_placeholder(text).await;

        let hits = match self
            .search
            .search(
                &self.config.collection_name,
                vector,
                self.config.limit,
                self.config.score_threshold,
            )
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                return FallbackOutcome::BackendUnavailable {
                    reason: e.to_string(),
                };
            }
        };

        debug!(hits = hits.len(), "Context search complete");

        hits.into_iter()
            .next()
            .filter(|hit| hit.score >= self.config.score_threshold)
            .filter(|hit| !hit.content.trim().is_empty())
            .map_or(FallbackOutcome::Miss, FallbackOutcome::Hit)
    }
}

impl<E: Embedder, S: ContextSearch> ContextLookup for ContextFallback<E, S> {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn lookup(&self, text: &str) -> FallbackOutcome {
        if !self.config.enabled {
            return FallbackOutcome::Miss;
        }

        let outcome = match tokio::time::timeout(self.config.timeout, self.search_top_hit(text))
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => FallbackOutcome::BackendUnavailable {
                reason: format!("timed out after {:?}", self.config.timeout),
            },
        };

        match &outcome {
            FallbackOutcome::Hit(hit) => {
                info!(kind = outcome.kind(), score = hit.score, "Context fallback resolved")
            }
            FallbackOutcome::Miss => debug!(kind = outcome.kind(), "Context fallback empty"),
            FallbackOutcome::BackendUnavailable { reason } => {
                warn!(kind = outcome.kind(), reason = %reason, "Context fallback unavailable")
            }
        }

        outcome
    }
}
