use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::embedding::{EmbedderConfig, EmbeddingError, TextEmbedder};
use crate::vectordb::MockContextSearch;

const DIM: usize = 32;
const COLLECTION: &str = "fallback_test";

struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::RequestFailed {
            endpoint: "http://embedding.invalid".to_string(),
            reason: "connection refused".to_string(),
        })
    }

    fn embedding_dim(&self) -> usize {
        DIM
    }
}

fn stub_embedder() -> TextEmbedder {
    TextEmbedder::load(EmbedderConfig::stub().embedding_dim(DIM)).unwrap()
}

fn config() -> FallbackConfig {
    FallbackConfig::default().collection_name(COLLECTION)
}

fn negated(v: Vec<f32>) -> Vec<f32> {
    v.into_iter().map(|x| -x).collect()
}

#[tokio::test]
async fn test_lookup_returns_top_hit() {
    let search = MockContextSearch::new();
    search.insert(
        COLLECTION,
        placeholder_embedding("vuvu", DIM),
        "排灣語：vuvu\n中文：祖父母",
    );
    let fallback = ContextFallback::new(stub_embedder(), search, config());

    let outcome = fallback.lookup("vuvu").await;

    let hit = outcome.hit().expect("should hit");
    assert!(hit.content.contains("祖父母"));
    assert!(hit.score > 0.99);
    assert_eq!(outcome.kind(), "hit");
}

#[tokio::test]
async fn test_lookup_only_keeps_best_hit() {
    let search = MockContextSearch::new();
    let target = placeholder_embedding("vuvu", DIM);
    let mut nearby = target.clone();
    nearby[0] += 0.2;
    search.insert(COLLECTION, nearby, "second");
    search.insert(COLLECTION, target, "first");
    let fallback = ContextFallback::new(stub_embedder(), search, config());

    let outcome = fallback.lookup("vuvu").await;

    assert_eq!(outcome.hit().map(|h| h.content.as_str()), Some("first"));
}

#[tokio::test]
async fn test_lookup_below_threshold_is_miss() {
    let search = MockContextSearch::new();
    search.insert(
        COLLECTION,
        negated(placeholder_embedding("vuvu", DIM)),
        "排灣語：vuvu\n中文：祖父母",
    );
    let fallback = ContextFallback::new(stub_embedder(), search, config());

    assert_eq!(fallback.lookup("vuvu").await, FallbackOutcome::Miss);
}

#[tokio::test]
async fn test_lookup_blank_top_hit_is_miss() {
    let search = MockContextSearch::new();
    search.insert(COLLECTION, placeholder_embedding("vuvu", DIM), "   ");
    let fallback = ContextFallback::new(stub_embedder(), search, config());

    assert_eq!(fallback.lookup("vuvu").await, FallbackOutcome::Miss);
}

#[tokio::test]
async fn test_lookup_backend_unavailable() {
    let search = MockContextSearch::new();
    search.insert(COLLECTION, placeholder_embedding("vuvu", DIM), "x");
    search.set_unavailable(true);
    let fallback = ContextFallback::new(stub_embedder(), search, config());

    let outcome = fallback.lookup("vuvu").await;

    assert!(matches!(outcome, FallbackOutcome::BackendUnavailable { .. }));
    assert_eq!(outcome.kind(), "backend_unavailable");
    assert!(outcome.hit().is_none());
}

#[tokio::test]
async fn test_lookup_missing_collection_is_unavailable() {
    let fallback = ContextFallback::new(stub_embedder(), MockContextSearch::new(), config());

    let outcome = fallback.lookup("vuvu").await;

    assert!(matches!(outcome, FallbackOutcome::BackendUnavailable { .. }));
}

#[tokio::test]
async fn test_lookup_times_out() {
    let search = MockContextSearch::new().with_delay(Duration::from_millis(500));
    search.insert(COLLECTION, placeholder_embedding("vuvu", DIM), "x");
    let fallback = ContextFallback::new(
        stub_embedder(),
        search,
        config().timeout(Duration::from_millis(20)),
    );

    let outcome = fallback.lookup("vuvu").await;

    match outcome {
        FallbackOutcome::BackendUnavailable { reason } => assert!(reason.contains("timed out")),
        other => panic!("expected timeout, got {}", other),
    }
}

#[tokio::test]
async fn test_embedding_failure_uses_placeholder() {
    let search = MockContextSearch::new();
    search.insert(
        COLLECTION,
        placeholder_embedding("kama", DIM),
        "排灣語：kama\n中文：父親",
    );
    let fallback = ContextFallback::new(FailingEmbedder, search, config());

    let outcome = fallback.lookup("kama").await;

    assert!(outcome.is_hit());
}

#[tokio::test]
async fn test_disabled_fallback_never_searches() {
    let search = MockContextSearch::new();
    search.insert(COLLECTION, placeholder_embedding("vuvu", DIM), "x");
    let fallback = ContextFallback::new(
        stub_embedder(),
        search,
        FallbackConfig::disabled().collection_name(COLLECTION),
    );

    assert_eq!(fallback.lookup("vuvu").await, FallbackOutcome::Miss);
    assert_eq!(fallback.search_backend().search_calls(), 0);
}

#[tokio::test]
async fn test_arc_lookup_delegates() {
    let search = MockContextSearch::new();
    search.insert(COLLECTION, placeholder_embedding("vuvu", DIM), "x");
    let fallback = Arc::new(ContextFallback::new(stub_embedder(), search, config()));

    assert!(fallback.lookup("vuvu").await.is_hit());
}

#[test]
fn test_outcome_display() {
    assert_eq!(FallbackOutcome::Miss.to_string(), "MISS");
    assert_eq!(
        FallbackOutcome::Hit(FallbackHit::new("x", 0.75)).to_string(),
        "HIT (score: 0.7500)"
    );
    assert_eq!(
        FallbackOutcome::BackendUnavailable {
            reason: "down".to_string()
        }
        .to_string(),
        "BACKEND_UNAVAILABLE (down)"
    );
}
