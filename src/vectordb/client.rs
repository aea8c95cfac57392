use std::future::Future;

use qdrant_client::Qdrant;
use qdrant_client::qdrant::SearchPointsBuilder;

use super::error::VectorDbError;
use super::model::{FallbackHit, sort_by_relevance};

#[derive(Clone)]
/// Direct Qdrant client wrapper.
pub struct QdrantSearch {
    client: Qdrant,
    url: String,
}

impl QdrantSearch {
    /// Creates a client for `url`.
    pub fn new(url: &str) -> Result<Self, VectorDbError> {
        let client =
            Qdrant::from_url(url)
                .build()
                .map_err(|e| VectorDbError::ConnectionFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns `true` if the collection exists.
    pub async fn collection_exists(&self, name: &str) -> Result<bool, VectorDbError> {
        self.client
            .collection_exists(name)
            .await
            .map_err(|e| VectorDbError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })
    }

    /// Searches a collection, keeping hits scoring at least `score_threshold`.
    pub async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
        score_threshold: f32,
    ) -> Result<Vec<FallbackHit>, VectorDbError> {
        let search_builder = SearchPointsBuilder::new(collection, query, limit)
            .with_payload(true)
            .score_threshold(score_threshold);

        let search_result = self
            .client
            .search_points(search_builder)
            .await
            .map_err(|e| VectorDbError::SearchFailed {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        let mut hits: Vec<FallbackHit> = search_result
            .result
            .into_iter()
            .filter_map(FallbackHit::from_scored_point)
            .collect();
        sort_by_relevance(&mut hits);

        Ok(hits)
    }
}

impl std::fmt::Debug for QdrantSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantSearch")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Nearest-neighbour search interface used by the context fallback.
pub trait ContextSearch: Send + Sync {
    /// Returns hits scoring at least `score_threshold`, best first, at most `limit`.
    fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
        score_threshold: f32,
    ) -> impl Future<Output = Result<Vec<FallbackHit>, VectorDbError>> + Send;
}

impl ContextSearch for QdrantSearch {
    async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
        score_threshold: f32,
    ) -> Result<Vec<FallbackHit>, VectorDbError> {
        self.search(collection, query, limit, score_threshold).await
    }
}
