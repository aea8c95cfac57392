use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::vectordb::model::sort_by_relevance;
use crate::vectordb::{ContextSearch, FallbackHit, VectorDbError};

/// In-memory [`ContextSearch`] with cosine scoring and failure injection.
#[derive(Default)]
pub struct MockContextSearch {
    collections: std::sync::RwLock<HashMap<String, Vec<MockDocument>>>,
    unavailable: AtomicBool,
    delay: Option<Duration>,
    search_calls: AtomicUsize,
}

#[derive(Clone)]
struct MockDocument {
    vector: Vec<f32>,
    content: String,
}

impl MockContextSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every search by `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Adds a document to `collection`, creating the collection if needed.
    pub fn insert(&self, collection: &str, vector: Vec<f32>, content: impl Into<String>) {
        if let Ok(mut collections) = self.collections.write() {
            collections
                .entry(collection.to_string())
                .or_default()
                .push(MockDocument {
                    vector,
                    content: content.into(),
                });
        }
    }

    /// Makes every subsequent search fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of searches issued so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn document_count(&self, collection: &str) -> Option<usize> {
        self.collections
            .read()
            .ok()?
            .get(collection)
            .map(|docs| docs.len())
    }
}

impl ContextSearch for MockContextSearch {
    async fn search(
        &self,
        collection: &str,
        query: Vec<f32>,
        limit: u64,
        score_threshold: f32,
    ) -> Result<Vec<FallbackHit>, VectorDbError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(VectorDbError::ConnectionFailed {
                url: "mock://context-search".to_string(),
                message: "backend marked unavailable".to_string(),
            });
        }

        let collections = self
            .collections
            .read()
            .map_err(|_| VectorDbError::SearchFailed {
                collection: collection.to_string(),
                message: "lock poisoned".to_string(),
            })?;

        let docs = collections
            .get(collection)
            .ok_or_else(|| VectorDbError::CollectionNotFound {
                collection: collection.to_string(),
            })?;

        let mut hits: Vec<FallbackHit> = docs
            .iter()
            .map(|doc| {
                FallbackHit::new(doc.content.clone(), cosine_similarity(&query, &doc.vector))
            })
            .filter(|hit| hit.score >= score_threshold)
            .collect();

        sort_by_relevance(&mut hits);
        hits.truncate(limit as usize);
        Ok(hits)
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
