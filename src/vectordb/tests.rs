use std::time::Duration;

use super::client::ContextSearch;
use super::error::VectorDbError;
use super::mock::{MockContextSearch, cosine_similarity};
use super::model::{FallbackHit, sort_by_relevance};

const TEST_COLLECTION: &str = "test_collection";

fn unit(axis: usize, dim: usize) -> Vec<f32> {
    let mut v = vec![0.0; dim];
    v[axis] = 1.0;
    v
}

fn seeded_mock() -> MockContextSearch {
    let mock = MockContextSearch::new();
    mock.insert(TEST_COLLECTION, unit(0, 4), "排灣語：vuvu\n中文：祖父母");
    mock.insert(TEST_COLLECTION, vec![0.8, 0.6, 0.0, 0.0], "排灣語：kama\n中文：父親");
    mock.insert(TEST_COLLECTION, unit(2, 4), "排灣語：kina\n中文：母親");
    mock
}

#[test]
fn test_cosine_similarity() {
    assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
    assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
    assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
}

#[test]
fn test_sort_by_relevance_descending() {
    let mut hits = vec![
        FallbackHit::new("low", 0.2),
        FallbackHit::new("high", 0.9),
        FallbackHit::new("mid", 0.5),
    ];

    sort_by_relevance(&mut hits);

    let order: Vec<&str> = hits.iter().map(|h| h.content.as_str()).collect();
    assert_eq!(order, ["high", "mid", "low"]);
}

#[tokio::test]
async fn test_mock_search_orders_and_thresholds() {
    let mock = seeded_mock();

    let hits = mock
        .search(TEST_COLLECTION, unit(0, 4), 3, 0.6)
        .await
        .expect("should search");

    assert_eq!(hits.len(), 2);
    assert!(hits[0].content.contains("vuvu"));
    assert!(hits[1].content.contains("kama"));
    assert!(hits[0].score >= hits[1].score);
}

#[tokio::test]
async fn test_mock_search_respects_limit() {
    let mock = seeded_mock();

    let hits = mock
        .search(TEST_COLLECTION, unit(0, 4), 1, 0.0)
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert!(hits[0].content.contains("vuvu"));
}

#[tokio::test]
async fn test_mock_search_unknown_collection() {
    let mock = seeded_mock();

    let err = mock
        .search("missing", unit(0, 4), 3, 0.6)
        .await
        .expect_err("should fail");

    assert!(matches!(err, VectorDbError::CollectionNotFound { .. }));
}

#[tokio::test]
async fn test_mock_search_unavailable() {
    let mock = seeded_mock();
    mock.set_unavailable(true);

    let err = mock
        .search(TEST_COLLECTION, unit(0, 4), 3, 0.6)
        .await
        .expect_err("should fail");
    assert!(matches!(err, VectorDbError::ConnectionFailed { .. }));

    mock.set_unavailable(false);
    assert!(mock.search(TEST_COLLECTION, unit(0, 4), 3, 0.6).await.is_ok());
    assert_eq!(mock.search_calls(), 2);
}

#[tokio::test]
async fn test_mock_search_delay() {
    let mock = seeded_mock().with_delay(Duration::from_millis(20));

    let started = std::time::Instant::now();
    mock.search(TEST_COLLECTION, unit(0, 4), 3, 0.6)
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(20));
}

#[test]
fn test_document_count() {
    let mock = seeded_mock();

    assert_eq!(mock.document_count(TEST_COLLECTION), Some(3));
    assert_eq!(mock.document_count("missing"), None);
}

#[tokio::test]
async fn test_qdrant_client_builds_without_connecting() {
    let client = super::QdrantSearch::new("http://localhost:6334").expect("should build");
    assert_eq!(client.url(), "http://localhost:6334");
}
