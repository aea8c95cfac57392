use qdrant_client::qdrant::ScoredPoint;

/// Payload field holding the paired-line text of an indexed document.
pub const CONTENT_PAYLOAD_FIELD: &str = "content";

/// One nearest-neighbour result: indexed text and its relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackHit {
    pub content: String,
    pub score: f32,
}

impl FallbackHit {
    pub fn new(content: impl Into<String>, score: f32) -> Self {
        Self {
            content: content.into(),
            score,
        }
    }

    /// Converts a Qdrant point, dropping points without a string `content` payload.
    pub fn from_scored_point(point: ScoredPoint) -> Option<Self> {
        let content = point
            .payload
            .get(CONTENT_PAYLOAD_FIELD)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())?;

        Some(FallbackHit {
            content,
            score: point.score,
        })
    }
}

/// Orders hits by descending score (stable for equal scores).
pub fn sort_by_relevance(hits: &mut [FallbackHit]) {
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
